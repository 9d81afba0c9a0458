use serde::{Deserialize, Serialize};

use crate::{
    Error,
    currency::{self, Amount},
};

/// The ID the POS server assigns to a product.
pub type ProductId = i64;

/// The categories a product can be filed under.
pub const PRODUCT_CATEGORIES: [&str; 4] = ["ATK", "RT", "Masak", "Elektronik"];

/// A product that can be sold in a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The ID of the product.
    pub id: ProductId,
    /// The display name of the product.
    pub name: String,
    /// The unit price in Rupiah.
    pub price: Amount,
    /// One of [PRODUCT_CATEGORIES].
    pub category: String,
}

/// The request body for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    /// The display name of the product.
    pub name: String,
    /// The unit price in Rupiah.
    pub price: Amount,
    /// One of [PRODUCT_CATEGORIES].
    pub category: String,
}

/// The form data submitted by the product modal.
///
/// The price arrives as it was typed, e.g. `"15.000"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    /// The display name of the product.
    pub name: String,
    /// The unit price as shown in the input field.
    pub price: String,
    /// The selected category.
    #[serde(default)]
    pub category: String,
}

impl ProductForm {
    /// Check the form and turn it into the request body for the POS server.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] if the name or price is blank and
    /// [Error::InvalidChoice] if the category is not one of [PRODUCT_CATEGORIES].
    pub fn validate(&self) -> Result<NewProduct, Error> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(Error::EmptyField("Product name"));
        }

        if currency::format_digits(&self.price).is_empty() {
            return Err(Error::EmptyField("Price"));
        }

        if !PRODUCT_CATEGORIES.contains(&self.category.as_str()) {
            return Err(Error::InvalidChoice {
                value: self.category.clone(),
                field: "category",
            });
        }

        Ok(NewProduct {
            name: name.to_owned(),
            price: currency::parse(&self.price),
            category: self.category.clone(),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: currency::format(product.price),
            category: product.category.clone(),
        }
    }
}

#[cfg(test)]
mod product_form_tests {
    use crate::Error;

    use super::{NewProduct, ProductForm};

    fn form(name: &str, price: &str, category: &str) -> ProductForm {
        ProductForm {
            name: name.to_owned(),
            price: price.to_owned(),
            category: category.to_owned(),
        }
    }

    #[test]
    fn parses_formatted_price() {
        let got = form(" Pensil 2B ", "15.000", "ATK").validate();

        assert_eq!(
            got,
            Ok(NewProduct {
                name: "Pensil 2B".to_owned(),
                price: 15_000,
                category: "ATK".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            form("   ", "1.000", "RT").validate(),
            Err(Error::EmptyField("Product name"))
        );
    }

    #[test]
    fn rejects_price_without_digits() {
        assert_eq!(
            form("Panci", "Rp", "Masak").validate(),
            Err(Error::EmptyField("Price"))
        );
    }

    #[test]
    fn rejects_unknown_category() {
        assert_eq!(
            form("Kipas", "250.000", "Mainan").validate(),
            Err(Error::InvalidChoice {
                value: "Mainan".to_owned(),
                field: "category",
            })
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        let got = form("Sampel", "0", "RT").validate().map(|product| product.price);

        assert_eq!(got, Ok(0));
    }
}
