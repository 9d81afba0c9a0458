use serde::{Deserialize, Serialize};

use crate::Error;

/// The ID the POS server assigns to a customer.
pub type CustomerId = i64;

/// The gender values accepted by the POS server, paired with their display labels.
pub const GENDERS: [(&str, &str); 2] = [("male", "Male"), ("female", "Female")];

/// A customer who buys products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// The ID of the customer.
    pub id: CustomerId,
    /// The full name of the customer.
    pub name: String,
    /// The town or city where the customer lives.
    pub domicile: String,
    /// Either `"male"` or `"female"`.
    pub gender: String,
}

/// The request body for creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    /// The full name of the customer.
    pub name: String,
    /// The town or city where the customer lives.
    pub domicile: String,
    /// Either `"male"` or `"female"`.
    pub gender: String,
}

/// The form data submitted by the customer modal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerForm {
    /// The full name of the customer.
    pub name: String,
    /// The town or city where the customer lives.
    pub domicile: String,
    /// The selected gender.
    #[serde(default)]
    pub gender: String,
}

impl CustomerForm {
    /// Check the form and turn it into the request body for the POS server.
    ///
    /// # Errors
    /// Returns [Error::EmptyField] if the name or domicile is blank and
    /// [Error::InvalidChoice] if the gender is not one of [GENDERS].
    pub fn validate(&self) -> Result<NewCustomer, Error> {
        let name = self.name.trim();
        let domicile = self.domicile.trim();

        if name.is_empty() {
            return Err(Error::EmptyField("Customer name"));
        }

        if domicile.is_empty() {
            return Err(Error::EmptyField("Domicile"));
        }

        if !GENDERS.iter().any(|(value, _)| *value == self.gender) {
            return Err(Error::InvalidChoice {
                value: self.gender.clone(),
                field: "gender",
            });
        }

        Ok(NewCustomer {
            name: name.to_owned(),
            domicile: domicile.to_owned(),
            gender: self.gender.clone(),
        })
    }
}

impl From<&Customer> for CustomerForm {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            domicile: customer.domicile.clone(),
            gender: customer.gender.clone(),
        }
    }
}

/// Get the display label for a gender value, falling back to the raw value.
pub fn gender_label(gender: &str) -> &str {
    GENDERS
        .iter()
        .find(|(value, _)| *value == gender)
        .map(|(_, label)| *label)
        .unwrap_or(gender)
}
