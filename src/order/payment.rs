//! Decides whether an order may be submitted.

use crate::{Error, currency::Amount, customer::CustomerId};

/// Whether an order with these values may be submitted.
///
/// True iff a customer is selected and the amount paid covers the total.
pub fn is_submittable(amount_paid: Amount, total: Amount, customer_id: Option<CustomerId>) -> bool {
    check_submittable(amount_paid, total, customer_id).is_ok()
}

/// Like [is_submittable], but says why an order cannot be submitted.
///
/// # Errors
/// Returns [Error::CustomerNotSelected] if there is no customer, otherwise
/// [Error::InsufficientPayment] if the amount paid is less than the total.
pub fn check_submittable(
    amount_paid: Amount,
    total: Amount,
    customer_id: Option<CustomerId>,
) -> Result<CustomerId, Error> {
    let customer_id = customer_id.ok_or(Error::CustomerNotSelected)?;

    if amount_paid < total {
        return Err(Error::InsufficientPayment { amount_paid, total });
    }

    Ok(customer_id)
}
