use serde::{Deserialize, Serialize};
use time::{
    Date, Month, OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::{currency::Amount, customer::CustomerId, product::ProductId};

/// The ID the POS server assigns to a transaction.
pub type TransactionId = i64;

/// A sale as returned by the POS server.
///
/// Fields the dashboard does not use are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The customer who made the purchase.
    pub customer_id: CustomerId,
    /// The total price of the products in the transaction.
    pub total: Amount,
    /// How much money the customer handed over.
    pub amount_paid: Amount,
    /// How much money was given back to the customer.
    #[serde(default)]
    pub amount_change: Amount,
    /// When the transaction happened, as sent by the server.
    #[serde(default)]
    pub date: String,
    /// The products in the transaction.
    #[serde(default)]
    pub transaction_details: Vec<TransactionDetail>,
    /// The customer record the server embeds in the transaction.
    #[serde(default)]
    pub customer: Option<EmbeddedCustomer>,
}

/// One product line of a persisted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetail {
    /// The product that was sold.
    pub product_id: ProductId,
    /// How many units were sold.
    ///
    /// Kept signed so that a bad record can be reported instead of failing
    /// to decode the whole list.
    pub quantity: i64,
    /// The product record the server embeds in the detail.
    #[serde(default)]
    pub product: Option<EmbeddedProduct>,
}

/// The subset of a product the server embeds in a transaction detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedProduct {
    /// The name of the product.
    pub name: String,
    /// The unit price of the product.
    pub price: Amount,
}

/// The subset of a customer the server embeds in a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedCustomer {
    /// The name of the customer.
    pub name: String,
}

impl Transaction {
    /// The name of the customer, or a placeholder if the server did not embed one.
    pub fn customer_name(&self) -> String {
        match &self.customer {
            Some(customer) => customer.name.clone(),
            None => format!("Customer #{}", self.customer_id),
        }
    }
}

impl TransactionDetail {
    /// The name of the product, or a placeholder if the server did not embed one.
    pub fn product_name(&self) -> String {
        match &self.product {
            Some(product) => product.name.clone(),
            None => format!("Product #{}", self.product_id),
        }
    }

    /// The embedded unit price times the quantity.
    ///
    /// Returns `None` if the server did not embed the product or the quantity is negative.
    pub fn subtotal(&self) -> Option<Amount> {
        let product = self.product.as_ref()?;
        let quantity = Amount::try_from(self.quantity).ok()?;

        Some(product.price.saturating_mul(quantity))
    }
}

/// The request body for creating or updating a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The customer who made the purchase.
    pub customer_id: CustomerId,
    /// The total price of the line items.
    pub total: Amount,
    /// How much money the customer handed over.
    pub amount_paid: Amount,
    /// The products in the transaction.
    pub items: Vec<NewTransactionItem>,
}

/// One product line of a [NewTransaction].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransactionItem {
    /// The product that was sold.
    pub product_id: ProductId,
    /// How many units were sold.
    pub quantity: u32,
}

/// Format the date of a transaction in long Indonesian form, e.g. `1 Mei 2025`.
///
/// Timestamps are converted to `local_offset` first. Plain dates are shown as is,
/// and anything that cannot be parsed is returned unchanged.
pub fn format_transaction_date(raw: &str, local_offset: UtcOffset) -> String {
    match parse_transaction_date(raw, local_offset) {
        Some(date) => format_long_date(date),
        None => raw.to_owned(),
    }
}

fn parse_transaction_date(raw: &str, local_offset: UtcOffset) -> Option<Date> {
    let raw = raw.trim();

    if let Ok(timestamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(timestamp.to_offset(local_offset).date());
    }

    let date_part = raw.get(..10)?;
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
}

fn format_long_date(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        indonesian_month_name(date.month()),
        date.year()
    )
}

fn indonesian_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}


#[cfg(test)]
mod format_transaction_date_tests {
    use time::{UtcOffset, macros::offset};

    use super::format_transaction_date;

    #[test]
    fn formats_timestamp_in_local_time() {
        // 20:00 UTC is already the next day in Jakarta.
        let got = format_transaction_date("2025-04-30T20:00:00Z", offset!(+7));

        assert_eq!(got, "1 Mei 2025");
    }

    #[test]
    fn formats_plain_date() {
        assert_eq!(
            format_transaction_date("2024-12-25", UtcOffset::UTC),
            "25 Desember 2024"
        );
    }

    #[test]
    fn formats_date_time_without_offset() {
        assert_eq!(
            format_transaction_date("2025-08-17 09:30:00", UtcOffset::UTC),
            "17 Agustus 2025"
        );
    }

    #[test]
    fn returns_unparseable_input_unchanged() {
        assert_eq!(format_transaction_date("kemarin", UtcOffset::UTC), "kemarin");
        assert_eq!(format_transaction_date("", UtcOffset::UTC), "");
    }
}
