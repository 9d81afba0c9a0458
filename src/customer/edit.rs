use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    ApiClient,
    customer::{
        CustomerForm, CustomerId, customers_changed,
        modal::{CustomerModalMode, customer_modal},
    },
};

/// Handle the customer modal's edit form.
pub async fn update_customer_endpoint(
    Path(customer_id): Path<CustomerId>,
    State(api): State<ApiClient>,
    Form(form): Form<CustomerForm>,
) -> Response {
    let customer = match form.validate() {
        Ok(customer) => customer,
        Err(error) => {
            return customer_modal(
                CustomerModalMode::Edit(customer_id),
                &form,
                Some(&format!("Error: {error}")),
            )
            .into_response();
        }
    };

    match api.update_customer(customer_id, &customer).await {
        Ok(()) => customers_changed("Customer updated successfully!"),
        Err(error) => {
            tracing::error!("Could not update customer {customer_id}: {error}");
            error.into_alert_response()
        }
    }
}
