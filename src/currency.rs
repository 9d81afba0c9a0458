//! Formatting and parsing of Rupiah amounts.
//!
//! Amounts are whole numbers in the smallest currency unit. The display form
//! groups the digits in threes with a `.`, e.g. `13000` is shown as `13.000`.
//! The currency symbol is not part of the display form, [format_rupiah] adds it
//! for tables and read-only fields.

/// An amount of money in the smallest currency unit.
pub type Amount = u64;

const GROUP_SEPARATOR: char = '.';

/// Format `amount` with a `.` between every group of three digits.
pub fn format(amount: Amount) -> String {
    format_digits(&amount.to_string())
}

/// Keep only the digits of `input` and group them in threes from the right.
///
/// Leading zeros are dropped, so `"0050000"` becomes `"50.000"`. An input
/// without any digits gives an empty string, which lets a cleared input field
/// stay empty instead of showing `"0"`.
pub fn format_digits(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return String::new();
    }

    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(GROUP_SEPARATOR);
        }

        formatted.push(digit);
    }

    formatted
}

/// Parse the digits of `input` as an amount.
///
/// Every non-digit character is ignored, so both `"13.000"` and `"Rp 13.000"`
/// parse to `13000`. Input without digits parses to zero and values too large
/// for [Amount] saturate at [Amount::MAX].
pub fn parse(input: &str) -> Amount {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |amount: Amount, digit| {
            amount.saturating_mul(10).saturating_add(Amount::from(digit))
        })
}

/// Format `amount` for display with the Rupiah symbol, e.g. `"Rp 13.000"`.
pub fn format_rupiah(amount: Amount) -> String {
    format!("Rp {}", format(amount))
}


#[cfg(test)]
mod parse_tests {
    use super::{Amount, format, parse};

    #[test]
    fn ignores_separators_and_symbols() {
        assert_eq!(parse("13.000"), 13_000);
        assert_eq!(parse("Rp 1.500.000"), 1_500_000);
        assert_eq!(parse(" 42 "), 42);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(parse(""), 0);
        assert_eq!(parse("abc"), 0);
    }

    #[test]
    fn saturates_on_overflow() {
        assert_eq!(parse("99999999999999999999999999"), Amount::MAX);
    }

    #[test]
    fn amounts_past_f64_precision_survive_formatting() {
        let amount: Amount = (1 << 53) + 1;

        assert_eq!(format(amount), "9.007.199.254.740.993");
        assert_eq!(parse(&format(amount)), amount);
    }

    #[test]
    fn parse_undoes_format() {
        let mut amount: Amount = 0;

        while amount < Amount::MAX / 7 {
            assert_eq!(parse(&format(amount)), amount, "round trip of {amount}");
            amount = amount * 7 + 3;
        }

        assert_eq!(parse(&format(Amount::MAX)), Amount::MAX);
    }
}
