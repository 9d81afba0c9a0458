//! Products: the list page, the product modal and the endpoints that forward
//! changes to the POS server.

mod core;
mod create;
mod delete;
mod edit;
mod list;
mod modal;

pub use core::{NewProduct, PRODUCT_CATEGORIES, Product, ProductForm, ProductId};
pub use create::create_product_endpoint;
pub use delete::delete_product_endpoint;
pub use edit::update_product_endpoint;
pub use list::{get_products_page, get_products_table};
pub use modal::{get_edit_product_modal, get_new_product_modal, get_product_modal};

use axum::response::{IntoResponse, Response};
use axum_htmx::HxResponseTrigger;

use crate::alert::Alert;

/// The event that makes the products table reload itself.
pub const PRODUCTS_CHANGED: &str = "products-changed";

/// Close the modal, show `message` and reload the products table.
fn products_changed(message: &str) -> Response {
    (
        HxResponseTrigger::normal([PRODUCTS_CHANGED]),
        Alert::SuccessSimple {
            message: message.to_owned(),
        },
    )
        .into_response()
}
