//! Customers: the list page, the customer modal and the endpoints that
//! forward changes to the POS server.

mod core;
mod create;
mod delete;
mod edit;
mod list;
mod modal;

pub use core::{Customer, CustomerForm, CustomerId, GENDERS, NewCustomer, gender_label};
pub use create::create_customer_endpoint;
pub use delete::delete_customer_endpoint;
pub use edit::update_customer_endpoint;
pub use list::{get_customers_page, get_customers_table};
pub use modal::{get_customer_modal, get_edit_customer_modal, get_new_customer_modal};

use axum::response::{IntoResponse, Response};
use axum_htmx::HxResponseTrigger;

use crate::alert::Alert;

/// The event that makes the customers table reload itself.
pub const CUSTOMERS_CHANGED: &str = "customers-changed";

fn customers_changed(message: &str) -> Response {
    (
        HxResponseTrigger::normal([CUSTOMERS_CHANGED]),
        Alert::SuccessSimple {
            message: message.to_owned(),
        },
    )
        .into_response()
}
