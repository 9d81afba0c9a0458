//! Transactions: the list page, the transaction modal backed by a server-side
//! draft, and the endpoints that forward changes to the POS server.
//!
//! This module contains:
//! - The `Transaction` record and the request body sent to the POS server
//! - The transactions table with expandable product details
//! - The modal endpoints that edit a draft one change at a time and submit it

mod core;
mod delete_endpoint;
mod draft_endpoints;
mod submit_endpoint;
mod transactions_page;
mod view;

pub use core::{
    EmbeddedCustomer, EmbeddedProduct, NewTransaction, NewTransactionItem, Transaction,
    TransactionDetail, TransactionId, format_transaction_date,
};
pub use delete_endpoint::delete_transaction_endpoint;
pub use draft_endpoints::{
    add_draft_item, close_transaction_draft, open_record_draft, open_transaction_draft,
    remove_draft_item, select_draft_customer, set_draft_amount_paid,
};
pub use submit_endpoint::submit_transaction_draft;
pub use transactions_page::{get_transactions_page, get_transactions_table};

use axum::extract::FromRef;

use crate::{ApiClient, AppState, drafts::DraftStore};

/// The event that makes the transactions table reload itself.
pub const TRANSACTIONS_CHANGED: &str = "transactions-changed";

/// The state needed by the transaction modal endpoints.
#[derive(Debug, Clone)]
pub struct TransactionDraftState {
    /// The client for the POS server.
    pub api: ApiClient,
    /// The open transaction modals.
    pub drafts: DraftStore,
}

impl FromRef<AppState> for TransactionDraftState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            drafts: state.drafts.clone(),
        }
    }
}
