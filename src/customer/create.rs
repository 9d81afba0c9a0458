use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    ApiClient,
    customer::{
        CustomerForm, customers_changed,
        modal::{CustomerModalMode, customer_modal},
    },
};

/// Handle the customer modal's create form.
pub async fn create_customer_endpoint(
    State(api): State<ApiClient>,
    Form(form): Form<CustomerForm>,
) -> Response {
    let customer = match form.validate() {
        Ok(customer) => customer,
        Err(error) => {
            return customer_modal(
                CustomerModalMode::Create,
                &form,
                Some(&format!("Error: {error}")),
            )
            .into_response();
        }
    };

    match api.create_customer(&customer).await {
        Ok(()) => customers_changed("Customer successfully added!"),
        Err(error) => {
            tracing::error!("Could not create customer {}: {error}", customer.name);
            error.into_alert_response()
        }
    }
}
