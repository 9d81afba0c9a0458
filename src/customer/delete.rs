use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    ApiClient,
    customer::{CustomerId, customers_changed},
};

/// Delete customer `customer_id` on the POS server.
pub async fn delete_customer_endpoint(
    Path(customer_id): Path<CustomerId>,
    State(api): State<ApiClient>,
) -> Response {
    match api.delete_customer(customer_id).await {
        Ok(()) => customers_changed("Customer successfully deleted!"),
        Err(error) => {
            tracing::error!("Could not delete customer {customer_id}: {error}");
            error.into_alert_response()
        }
    }
}
