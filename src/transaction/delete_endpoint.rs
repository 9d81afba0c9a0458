//! Deletes a transaction on the POS server.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxResponseTrigger;

use crate::{
    ApiClient,
    alert::Alert,
    transaction::{TRANSACTIONS_CHANGED, TransactionId},
};

/// Delete transaction `transaction_id` and reload the transactions table.
pub async fn delete_transaction_endpoint(
    Path(transaction_id): Path<TransactionId>,
    State(api): State<ApiClient>,
) -> Response {
    match api.delete_transaction(transaction_id).await {
        Ok(()) => (
            HxResponseTrigger::normal([TRANSACTIONS_CHANGED]),
            Alert::SuccessSimple {
                message: "Transaction successfully deleted!".to_owned(),
            },
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod delete_transaction_endpoint_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        test_utils::{
            StubApi, alert_message, assert_hx_trigger, assert_status_ok, parse_html_fragment,
        },
        transaction::delete_transaction_endpoint,
    };

    #[tokio::test]
    async fn deletes_transaction_and_reloads_table() {
        let stub = StubApi::new().serve().await;

        let response = delete_transaction_endpoint(Path(7), State(stub.client())).await;

        assert_status_ok(&response);
        assert_hx_trigger(&response, "transactions-changed");
        let html = parse_html_fragment(response).await;
        assert_eq!(alert_message(&html), "Transaction successfully deleted!");
        let requests = stub.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/api/transaction/7");
    }

    #[tokio::test]
    async fn failed_delete_shows_error() {
        let stub = StubApi::new()
            .with_write_status(StatusCode::NOT_FOUND)
            .serve()
            .await;

        let response = delete_transaction_endpoint(Path(7), State(stub.client())).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = parse_html_fragment(response).await;
        assert_eq!(alert_message(&html), "This didn't work.");
    }
}
