//! The customer modal for creating, editing and viewing a customer.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    ApiClient, Error,
    customer::{Customer, CustomerForm, CustomerId, GENDERS},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, ModalClose, cancel_button,
        form_error, modal, select_input,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CustomerModalMode {
    Create,
    Edit(CustomerId),
    View,
}

/// Render the modal for adding a customer.
pub async fn get_new_customer_modal() -> Markup {
    customer_modal(CustomerModalMode::Create, &CustomerForm::default(), None)
}

/// Render the modal for editing customer `customer_id`.
pub async fn get_edit_customer_modal(
    Path(customer_id): Path<CustomerId>,
    State(api): State<ApiClient>,
) -> Response {
    match find_customer(&api, customer_id).await {
        Ok(customer) => customer_modal(
            CustomerModalMode::Edit(customer_id),
            &CustomerForm::from(&customer),
            None,
        )
        .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Render the read-only modal for customer `customer_id`.
pub async fn get_customer_modal(
    Path(customer_id): Path<CustomerId>,
    State(api): State<ApiClient>,
) -> Response {
    match find_customer(&api, customer_id).await {
        Ok(customer) => {
            customer_modal(CustomerModalMode::View, &CustomerForm::from(&customer), None)
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

async fn find_customer(api: &ApiClient, customer_id: CustomerId) -> Result<Customer, Error> {
    api.list_customers()
        .await
        .inspect_err(|error| tracing::error!("Could not load customer {customer_id}: {error}"))?
        .into_iter()
        .find(|customer| customer.id == customer_id)
        .ok_or(Error::NotFound)
}

pub(super) fn customer_modal(
    mode: CustomerModalMode,
    form: &CustomerForm,
    error_message: Option<&str>,
) -> Markup {
    let (title, submit_text) = match mode {
        CustomerModalMode::Create => ("Create New Customer", Some("Add Customer")),
        CustomerModalMode::Edit(_) => ("Edit Customer", Some("Update Customer")),
        CustomerModalMode::View => ("Customer Details", None),
    };
    let read_only = submit_text.is_none();
    let create_endpoint = (mode == CustomerModalMode::Create).then_some(endpoints::CUSTOMERS_API);
    let update_endpoint = match mode {
        CustomerModalMode::Edit(customer_id) => {
            Some(endpoints::format_endpoint(endpoints::CUSTOMER_API, customer_id))
        }
        _ => None,
    };
    let close = ModalClose::get(endpoints::CLOSE_MODAL);

    let body = html!(
        form
            hx-post=[create_endpoint]
            hx-put=[update_endpoint]
            class="space-y-4"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Customer Name" }

                input
                    type="text"
                    name="name"
                    id="name"
                    value=(form.name)
                    placeholder="Enter customer name"
                    required
                    readonly[read_only]
                    autofocus[!read_only]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="domicile" class=(FORM_LABEL_STYLE) { "Domicile" }

                input
                    type="text"
                    name="domicile"
                    id="domicile"
                    value=(form.domicile)
                    placeholder="Enter customer domicile"
                    required
                    readonly[read_only]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="gender" class=(FORM_LABEL_STYLE) { "Gender" }
                (select_input("gender", "gender", "Choose a gender", &GENDERS, &form.gender, read_only))
            }

            (form_error(error_message))

            div class="flex gap-3 pt-2"
            {
                (cancel_button(&close))

                @if let Some(submit_text) = submit_text {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_text) }
                }
            }
        }
    );

    modal(title, &close, &body)
}
