//! The endpoints behind the transaction modal.
//!
//! Each open modal is a draft kept in the [DraftStore](crate::drafts::DraftStore).
//! The modal sends one change at a time and gets back the part of the modal
//! that the change affects.

use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    Error,
    catalog::Catalog,
    currency,
    customer::CustomerId,
    drafts::DraftId,
    order::{CloseReason, DraftAction, ModalState, Quantity},
    product::ProductId,
    transaction::{
        TransactionDraftState, TransactionId,
        view::{transaction_modal, transaction_summary},
    },
};

/// Open the transaction modal with an empty draft.
pub async fn open_transaction_draft(State(state): State<TransactionDraftState>) -> Response {
    let catalog = match Catalog::fetch(&state.api).await {
        Ok(catalog) => catalog,
        Err(error) => {
            tracing::error!("Could not load the catalog for a new transaction: {error}");
            return error.into_alert_response();
        }
    };

    open_draft(&state, ModalState::open_create(catalog))
}

/// What a saved transaction is opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordMode {
    Edit,
    View,
}

/// The query string for opening a saved transaction.
#[derive(Debug, Deserialize)]
pub struct RecordQuery {
    pub mode: RecordMode,
}

/// Open the transaction modal filled from the saved transaction `transaction_id`.
pub async fn open_record_draft(
    Path(transaction_id): Path<TransactionId>,
    Query(query): Query<RecordQuery>,
    State(state): State<TransactionDraftState>,
) -> Response {
    let (catalog, transactions) = match tokio::try_join!(
        Catalog::fetch(&state.api),
        state.api.list_transactions()
    ) {
        Ok(lists) => lists,
        Err(error) => {
            tracing::error!("Could not load transaction {transaction_id}: {error}");
            return error.into_alert_response();
        }
    };

    let Some(transaction) = transactions
        .into_iter()
        .find(|transaction| transaction.id == transaction_id)
    else {
        return Error::NotFound.into_alert_response();
    };

    let modal_state = match query.mode {
        RecordMode::Edit => ModalState::open_edit(&transaction, catalog),
        RecordMode::View => ModalState::open_view(&transaction, catalog),
    };

    open_draft(&state, modal_state)
}

fn open_draft(state: &TransactionDraftState, modal_state: ModalState) -> Response {
    let result = state
        .drafts
        .open(modal_state.clone())
        .and_then(|draft_id| render_modal(draft_id, &modal_state));

    match result {
        Ok(markup) => markup.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// The form data for choosing the customer.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerChoice {
    /// The customer ID, empty to clear the choice.
    #[serde(default)]
    pub customer_id: String,
}

/// Choose the customer of draft `draft_id` and return the new summary.
pub async fn select_draft_customer(
    Path(draft_id): Path<DraftId>,
    State(state): State<TransactionDraftState>,
    Form(form): Form<CustomerChoice>,
) -> Response {
    let result = parse_customer_id(&form.customer_id).and_then(|customer_id| {
        state.drafts.update(draft_id, |modal_state| {
            let open = modal_state.as_open().ok_or(Error::ModalClosed)?;
            if let Some(customer_id) = customer_id
                .filter(|customer_id| open.catalog.customer(*customer_id).is_none())
            {
                return Err(Error::InvalidChoice {
                    value: customer_id.to_string(),
                    field: "customer",
                });
            }

            modal_state.apply(&DraftAction::SelectCustomer(customer_id))
        })
    });

    render_summary(draft_id, result)
}

fn parse_customer_id(input: &str) -> Result<Option<CustomerId>, Error> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|_| Error::InvalidChoice {
            value: input.to_owned(),
            field: "customer",
        })
}

/// The form data for adding a product.
#[derive(Debug, Default, Deserialize)]
pub struct NewItemForm {
    /// The product ID chosen in the drop-down.
    #[serde(default)]
    pub product_id: String,
    /// The number of units as typed.
    #[serde(default)]
    pub quantity: String,
}

/// Add a product to draft `draft_id` and return the whole modal.
pub async fn add_draft_item(
    Path(draft_id): Path<DraftId>,
    State(state): State<TransactionDraftState>,
    Form(form): Form<NewItemForm>,
) -> Response {
    let result = parse_product_id(&form.product_id).and_then(|product_id| {
        let quantity = Quantity::parse(&form.quantity)?;

        state.drafts.update(draft_id, |modal_state| {
            let open = modal_state.as_open().ok_or(Error::ModalClosed)?;
            let product = open
                .catalog
                .product_ref(product_id)
                .ok_or(Error::ProductNotFound(product_id))?;

            modal_state.apply(&DraftAction::AddProduct {
                product,
                quantity: i64::from(quantity.get()),
            })
        })
    });

    render_whole_modal(draft_id, result)
}

fn parse_product_id(input: &str) -> Result<ProductId, Error> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::EmptyField("Product"));
    }

    input.parse().map_err(|_| Error::InvalidChoice {
        value: input.to_owned(),
        field: "product",
    })
}

/// Remove a product from draft `draft_id` and return the whole modal.
pub async fn remove_draft_item(
    Path((draft_id, product_id)): Path<(DraftId, ProductId)>,
    State(state): State<TransactionDraftState>,
) -> Response {
    let result = state.drafts.update(draft_id, |modal_state| {
        modal_state.apply(&DraftAction::RemoveProduct(product_id))
    });

    render_whole_modal(draft_id, result)
}

/// The form data for the amount paid.
#[derive(Debug, Default, Deserialize)]
pub struct AmountPaidForm {
    /// The amount as typed, possibly with `.` separators.
    #[serde(default)]
    pub amount_paid: String,
}

/// Set the amount paid of draft `draft_id` and return the new summary.
pub async fn set_draft_amount_paid(
    Path(draft_id): Path<DraftId>,
    State(state): State<TransactionDraftState>,
    Form(form): Form<AmountPaidForm>,
) -> Response {
    let amount_paid = currency::parse(&form.amount_paid);
    let result = state.drafts.update(draft_id, |modal_state| {
        modal_state.apply(&DraftAction::SetAmountPaid(amount_paid))
    });

    render_summary(draft_id, result)
}

/// The query string for closing a modal.
#[derive(Debug, Deserialize)]
pub struct CloseQuery {
    pub reason: CloseReason,
}

/// Close draft `draft_id`, emptying the modal container.
pub async fn close_transaction_draft(
    Path(draft_id): Path<DraftId>,
    Query(query): Query<CloseQuery>,
    State(state): State<TransactionDraftState>,
) -> Response {
    match state.drafts.close(draft_id, query.reason) {
        Ok(()) => html!().into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn render_modal(draft_id: DraftId, modal_state: &ModalState) -> Result<Markup, Error> {
    let open = modal_state.as_open().ok_or(Error::ModalClosed)?;

    Ok(transaction_modal(draft_id, open))
}

fn render_whole_modal(draft_id: DraftId, result: Result<ModalState, Error>) -> Response {
    match result.and_then(|modal_state| render_modal(draft_id, &modal_state)) {
        Ok(markup) => markup.into_response(),
        Err(error) => {
            tracing::debug!("Rejected change to transaction draft {draft_id}: {error}");
            error.into_alert_response()
        }
    }
}

fn render_summary(draft_id: DraftId, result: Result<ModalState, Error>) -> Response {
    let result = result.and_then(|modal_state| {
        let open = modal_state.as_open().ok_or(Error::ModalClosed)?;
        Ok(transaction_summary(draft_id, open))
    });

    match result {
        Ok(markup) => markup.into_response(),
        Err(error) => {
            tracing::debug!("Rejected change to transaction draft {draft_id}: {error}");
            error.into_alert_response()
        }
    }
}
