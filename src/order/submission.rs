//! Turns an order draft into the request body the POS server expects.

use crate::{
    Error,
    order::{draft::OrderDraft, payment},
    transaction::{NewTransaction, NewTransactionItem},
};

/// Build the request body for submitting `draft`.
///
/// The total is computed from the line items, never taken from elsewhere.
///
/// # Errors
/// Returns [Error::CustomerNotSelected] or [Error::InsufficientPayment] if the
/// draft may not be submitted.
pub fn assemble(draft: &OrderDraft) -> Result<NewTransaction, Error> {
    let total = draft.total();
    let customer_id = payment::check_submittable(draft.amount_paid, total, draft.customer_id)?;

    let items = draft
        .line_items
        .iter()
        .map(|item| NewTransactionItem {
            product_id: item.product_id,
            quantity: item.quantity.get(),
        })
        .collect();

    Ok(NewTransaction {
        customer_id,
        total,
        amount_paid: draft.amount_paid,
        items,
    })
}
