//! The products in an order draft and how many of each are being bought.

use std::fmt::Display;

use crate::{
    Error,
    currency::Amount,
    product::{Product, ProductId},
};

/// A snapshot of a product taken when it is added to an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    /// The ID of the product.
    pub id: ProductId,
    /// The name to show for the line item.
    pub name: String,
    /// The price of a single unit.
    pub unit_price: Amount,
}

impl From<&Product> for ProductRef {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
        }
    }
}

/// A number of units of a product, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity.
    ///
    /// # Errors
    /// Returns [Error::InvalidQuantity] if `quantity` is zero, negative or too large.
    pub fn new(quantity: i64) -> Result<Self, Error> {
        match u32::try_from(quantity) {
            Ok(quantity) if quantity > 0 => Ok(Self(quantity)),
            _ => Err(Error::InvalidQuantity(quantity.to_string())),
        }
    }

    /// Parse a quantity typed into a form field.
    ///
    /// # Errors
    /// Returns [Error::InvalidQuantity] holding the raw input if it is not a
    /// whole number greater than zero.
    pub fn parse(input: &str) -> Result<Self, Error> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidQuantity(input.to_owned()))
            .and_then(Self::new)
    }

    /// The quantity as a plain number.
    pub fn get(self) -> u32 {
        self.0
    }

    fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product in an order draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// The product being bought.
    pub product_id: ProductId,
    /// The name to show for the line item.
    pub label: String,
    /// The price of a single unit when the product was added.
    pub unit_price: Amount,
    /// How many units are being bought.
    pub quantity: Quantity,
}

impl LineItem {
    /// The unit price times the quantity, saturating at [Amount::MAX].
    pub fn subtotal(&self) -> Amount {
        self.unit_price
            .saturating_mul(Amount::from(self.quantity.get()))
    }
}

/// The line items of an order, at most one per product, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItems(Vec<LineItem>);

impl LineItems {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the collection its quantity is increased,
    /// otherwise a new line item is appended.
    ///
    /// # Errors
    /// Returns [Error::InvalidQuantity] if `quantity` is less than one, in which
    /// case the collection is left unchanged.
    pub fn add(&mut self, product: &ProductRef, quantity: i64) -> Result<(), Error> {
        let quantity = Quantity::new(quantity)?;
        self.add_quantity(product, quantity);

        Ok(())
    }

    pub(crate) fn add_quantity(&mut self, product: &ProductRef, quantity: Quantity) {
        match self.0.iter_mut().find(|item| item.product_id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.0.push(LineItem {
                product_id: product.id,
                label: product.name.clone(),
                unit_price: product.unit_price,
                quantity,
            }),
        }
    }

    /// Remove the line item for `product_id`, doing nothing if there is none.
    pub fn remove(&mut self, product_id: ProductId) {
        self.0.retain(|item| item.product_id != product_id);
    }

    /// The line items in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.0.iter()
    }

    /// Get the line item for `product_id`.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.0.iter().find(|item| item.product_id == product_id)
    }

    /// The sum of the line item subtotals, saturating at [Amount::MAX].
    pub fn total(&self) -> Amount {
        self.0
            .iter()
            .fold(0, |total: Amount, item| total.saturating_add(item.subtotal()))
    }

    /// Whether there are no line items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of line items, which is also the number of distinct products.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
