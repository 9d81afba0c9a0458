//! The products and customers known when a transaction modal is opened.

use crate::{
    Error,
    api::ApiClient,
    customer::{Customer, CustomerId},
    order::ProductRef,
    product::{Product, ProductId},
};

/// A snapshot of the product and customer lists.
///
/// The snapshot is not refreshed while a modal is open, so it can fall behind
/// the POS server. Lookups therefore return `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// All products, in the order the server listed them.
    pub products: Vec<Product>,
    /// All customers, in the order the server listed them.
    pub customers: Vec<Customer>,
}

impl Catalog {
    /// Fetch the product and customer lists concurrently.
    ///
    /// # Errors
    /// Returns the first error from either request.
    pub async fn fetch(api: &ApiClient) -> Result<Self, Error> {
        let (products, customers) = tokio::try_join!(api.list_products(), api.list_customers())?;

        Ok(Self {
            products,
            customers,
        })
    }

    /// Find a product by ID.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Find a customer by ID.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// Snapshot a product for adding it to an order.
    pub fn product_ref(&self, id: ProductId) -> Option<ProductRef> {
        self.product(id).map(ProductRef::from)
    }
}

#[cfg(test)]
mod tests {
    use crate::{customer::Customer, order::ProductRef, product::Product};

    use super::Catalog;

    fn catalog() -> Catalog {
        Catalog {
            products: vec![Product {
                id: 10,
                name: "Rice cooker".to_owned(),
                price: 350_000,
                category: "Elektronik".to_owned(),
            }],
            customers: vec![Customer {
                id: 3,
                name: "Ayu".to_owned(),
                domicile: "Yogyakarta".to_owned(),
                gender: "female".to_owned(),
            }],
        }
    }

    #[test]
    fn finds_records_by_id() {
        let catalog = catalog();

        assert_eq!(catalog.product(10).map(|product| product.price), Some(350_000));
        assert_eq!(
            catalog.customer(3).map(|customer| customer.name.as_str()),
            Some("Ayu")
        );
    }

    #[test]
    fn missing_records_are_none() {
        let catalog = catalog();

        assert_eq!(catalog.product(11), None);
        assert_eq!(catalog.customer(10), None);
        assert_eq!(catalog.product_ref(3), None);
    }

    #[test]
    fn product_ref_copies_name_and_price() {
        assert_eq!(
            catalog().product_ref(10),
            Some(ProductRef {
                id: 10,
                name: "Rice cooker".to_owned(),
                unit_price: 350_000,
            })
        );
    }
}
