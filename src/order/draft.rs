//! The not yet submitted state of a transaction being created or edited.

use crate::{
    Error,
    currency::Amount,
    customer::CustomerId,
    order::{
        line_items::{LineItems, ProductRef},
        payment,
    },
    product::ProductId,
};

/// A transaction being put together in the transaction modal.
///
/// Every change produces a new draft, the original is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    /// The customer making the purchase, if one has been chosen.
    pub customer_id: Option<CustomerId>,
    /// The products being bought.
    pub line_items: LineItems,
    /// How much money the customer handed over.
    pub amount_paid: Amount,
}

/// A change the user makes to an [OrderDraft].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    /// Choose the customer, or clear the choice with `None`.
    SelectCustomer(Option<CustomerId>),
    /// Add units of a product, merging with an existing line item.
    AddProduct {
        /// The product to add.
        product: ProductRef,
        /// The number of units as entered, must be at least one.
        quantity: i64,
    },
    /// Remove the line item for a product.
    RemoveProduct(ProductId),
    /// Set the amount the customer paid.
    SetAmountPaid(Amount),
}

impl OrderDraft {
    /// An empty draft with no customer, line items or payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sum of the line item subtotals, computed on every call.
    pub fn total(&self) -> Amount {
        self.line_items.total()
    }

    /// The money to give back to the customer, or `None` if they have not paid enough.
    pub fn amount_change(&self) -> Option<Amount> {
        self.amount_paid.checked_sub(self.total())
    }

    /// Whether the draft has a customer and enough payment to be submitted.
    pub fn is_submittable(&self) -> bool {
        payment::is_submittable(self.amount_paid, self.total(), self.customer_id)
    }

    /// A copy of the draft with a different customer.
    pub fn with_customer(&self, customer_id: Option<CustomerId>) -> Self {
        Self {
            customer_id,
            ..self.clone()
        }
    }

    /// A copy of the draft with `quantity` more units of `product`.
    ///
    /// # Errors
    /// Returns [Error::InvalidQuantity] if `quantity` is less than one.
    pub fn with_product(&self, product: &ProductRef, quantity: i64) -> Result<Self, Error> {
        let mut line_items = self.line_items.clone();
        line_items.add(product, quantity)?;

        Ok(Self {
            line_items,
            ..self.clone()
        })
    }

    /// A copy of the draft without the line item for `product_id`.
    pub fn without_product(&self, product_id: ProductId) -> Self {
        let mut line_items = self.line_items.clone();
        line_items.remove(product_id);

        Self {
            line_items,
            ..self.clone()
        }
    }

    /// A copy of the draft with a different amount paid.
    pub fn with_amount_paid(&self, amount_paid: Amount) -> Self {
        Self {
            amount_paid,
            ..self.clone()
        }
    }

    /// Apply `action` and return the resulting draft.
    ///
    /// # Errors
    /// Returns [Error::InvalidQuantity] if a product is added with a quantity less than one.
    pub fn apply(&self, action: &DraftAction) -> Result<Self, Error> {
        match action {
            DraftAction::SelectCustomer(customer_id) => Ok(self.with_customer(*customer_id)),
            DraftAction::AddProduct { product, quantity } => {
                self.with_product(product, *quantity)
            }
            DraftAction::RemoveProduct(product_id) => Ok(self.without_product(*product_id)),
            DraftAction::SetAmountPaid(amount_paid) => Ok(self.with_amount_paid(*amount_paid)),
        }
    }
}
