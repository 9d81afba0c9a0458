//! Forwards a new product from the product modal to the POS server.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    ApiClient,
    product::{
        ProductForm,
        modal::{ProductModalMode, product_modal},
        products_changed,
    },
};

/// Handle the product modal's create form.
///
/// An invalid form is rendered again with the error. If the POS server does
/// not accept the product, an error alert is returned and the modal stays open.
pub async fn create_product_endpoint(
    State(api): State<ApiClient>,
    Form(form): Form<ProductForm>,
) -> Response {
    let product = match form.validate() {
        Ok(product) => product,
        Err(error) => {
            return product_modal(
                ProductModalMode::Create,
                &form,
                Some(&format!("Error: {error}")),
            )
            .into_response();
        }
    };

    match api.create_product(&product).await {
        Ok(()) => products_changed("Product successfully added!"),
        Err(error) => {
            tracing::error!("Could not create product {}: {error}", product.name);
            error.into_alert_response()
        }
    }
}
