use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    ApiClient,
    product::{ProductId, products_changed},
};

/// Delete product `product_id` on the POS server.
///
/// The delete button asks the user to confirm before this is called.
pub async fn delete_product_endpoint(
    Path(product_id): Path<ProductId>,
    State(api): State<ApiClient>,
) -> Response {
    match api.delete_product(product_id).await {
        Ok(()) => products_changed("Product successfully deleted!"),
        Err(error) => {
            tracing::error!("Could not delete product {product_id}: {error}");
            error.into_alert_response()
        }
    }
}
