//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, currency::Amount, drafts::DraftId, internal_server_error::InternalServerError,
    not_found::NotFoundError, product::ProductId,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the REST API could not be sent or no response arrived,
    /// e.g. the connection was refused or timed out.
    #[error("could not reach the API: {0}")]
    Transport(String),

    /// The REST API answered with a status code other than the one expected
    /// for the operation.
    #[error("the API responded to {method} {url} with status {status}")]
    UnexpectedStatus {
        /// The HTTP method of the request.
        method: String,
        /// The URL of the request.
        url: String,
        /// The status code of the response.
        status: u16,
    },

    /// The body returned by the REST API did not have the expected shape.
    #[error("could not decode the API response: {0}")]
    InvalidResponse(String),

    /// The configured base URL for the REST API is not a valid base URL.
    #[error("invalid API URL \"{0}\"")]
    InvalidApiUrl(String),

    /// A line item quantity was not a whole number greater than zero.
    ///
    /// Holds the quantity as entered by the user.
    #[error("quantity must be a whole number greater than zero, got \"{0}\"")]
    InvalidQuantity(String),

    /// A transaction was submitted without a customer.
    #[error("a customer must be selected")]
    CustomerNotSelected,

    /// A transaction was submitted with less money than the total.
    #[error("the amount paid ({amount_paid}) is less than the total ({total})")]
    InsufficientPayment {
        /// The amount the customer paid.
        amount_paid: Amount,
        /// The total of the line items.
        total: Amount,
    },

    /// A transaction opened for viewing was asked to change.
    #[error("the transaction is open for viewing only and cannot be changed")]
    ReadOnlyDraft,

    /// The transaction draft does not exist, either because its modal was
    /// closed or because the ID was never handed out.
    #[error("the transaction draft {0} is not open")]
    DraftNotFound(DraftId),

    /// The transaction draft is already being sent to the POS server.
    #[error("the transaction draft {0} is already being submitted")]
    DraftSubmitting(DraftId),

    /// A change was made to a transaction modal that has already been closed.
    #[error("the transaction modal is closed")]
    ModalClosed,

    /// The product ID does not refer to a product in the catalog snapshot.
    #[error("product {0} is not in the catalog")]
    ProductNotFound(ProductId),

    /// A required form field was left empty. Holds the name of the field.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// A form field was set to a value outside its list of choices.
    #[error("\"{value}\" is not a valid {field}")]
    InvalidChoice {
        /// The submitted value.
        value: String,
        /// The name of the field.
        field: &'static str,
    },

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the lock on the open transaction drafts.
    #[error("could not acquire the draft lock")]
    DraftLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::Transport(_) | Error::UnexpectedStatus { .. } | Error::InvalidResponse(_) => {
                tracing::error!("The API request for a page failed: {self}");
                InternalServerError {
                    description: "Could not load data",
                    fix: "The POS server could not be reached or gave an unexpected answer. \
                        Try again later or check the server logs.",
                }
                .into_response()
            }
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DraftLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::Transport(_) | Error::UnexpectedStatus { .. } | Error::InvalidResponse(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "This didn't work.".to_owned(),
                    details: "The POS server could not be reached or rejected the request. \
                        Your changes have not been saved, try again."
                        .to_owned(),
                },
            ),
            Error::InvalidQuantity(quantity) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid quantity".to_owned(),
                    details: format!(
                        "\"{quantity}\" is not a valid quantity. \
                        Enter a whole number greater than zero."
                    ),
                },
            ),
            Error::CustomerNotSelected => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Customer must be selected".to_owned(),
                    details: "Choose the customer for this transaction before submitting."
                        .to_owned(),
                },
            ),
            Error::InsufficientPayment { amount_paid, total } => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Insufficient payment".to_owned(),
                    details: format!(
                        "The amount paid (Rp {}) is less than the total (Rp {}).",
                        crate::currency::format(amount_paid),
                        crate::currency::format(total)
                    ),
                },
            ),
            Error::ReadOnlyDraft => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Transaction is read-only".to_owned(),
                    details: "Open the transaction with Edit to change it.".to_owned(),
                },
            ),
            Error::DraftNotFound(_) | Error::ModalClosed => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Transaction form expired".to_owned(),
                    details: "This transaction form is no longer open. \
                        Close it and open it again."
                        .to_owned(),
                },
            ),
            Error::DraftSubmitting(_) => (
                StatusCode::CONFLICT,
                Alert::Error {
                    message: "Transaction is being submitted".to_owned(),
                    details: "This transaction is already being sent to the POS server. \
                        Wait for it to finish."
                        .to_owned(),
                },
            ),
            Error::ProductNotFound(product_id) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Unknown product".to_owned(),
                    details: format!(
                        "Could not find a product with the ID {product_id}. \
                        Try refreshing the page to load the latest products."
                    ),
                },
            ),
            Error::EmptyField(field) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing value".to_owned(),
                    details: format!("{field} cannot be empty."),
                },
            ),
            Error::InvalidChoice { value, field } => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: format!("Invalid {field}"),
                    details: format!("\"{value}\" is not a valid {field}."),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Not found".to_owned(),
                    details: "The record could not be found. \
                        Try refreshing the page to see if it has already been deleted."
                        .to_owned(),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
