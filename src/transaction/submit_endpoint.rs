//! Sends a transaction draft to the POS server.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxResponseTrigger;
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    currency,
    drafts::DraftId,
    order::{CloseReason, DraftAction, ModalMode, ModalState, assemble},
    transaction::{TRANSACTIONS_CHANGED, TransactionDraftState},
};

/// The form data sent with the submit button.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    /// The amount paid as currently typed, which may not have reached the
    /// server yet because of the input delay.
    #[serde(default)]
    pub amount_paid: Option<String>,
}

/// Submit draft `draft_id`.
///
/// On success the draft is closed, the modal emptied and the transactions
/// table reloaded. On failure an error alert is returned and the draft stays
/// open so the user can fix it or try again.
pub async fn submit_transaction_draft(
    Path(draft_id): Path<DraftId>,
    State(state): State<TransactionDraftState>,
    Form(form): Form<SubmitForm>,
) -> Response {
    match submit(&state, draft_id, form).await {
        Ok(message) => (
            HxResponseTrigger::normal([TRANSACTIONS_CHANGED]),
            Alert::SuccessSimple {
                message: message.to_owned(),
            },
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not submit transaction draft {draft_id}: {error}");
            error.into_alert_response()
        }
    }
}

async fn submit(
    state: &TransactionDraftState,
    draft_id: DraftId,
    form: SubmitForm,
) -> Result<&'static str, Error> {
    if let Some(amount_paid) = form.amount_paid {
        let amount_paid = currency::parse(&amount_paid);
        state.drafts.update(draft_id, |modal_state| {
            modal_state.apply(&DraftAction::SetAmountPaid(amount_paid))
        })?;
    }

    // Claimed until the POS server answers.
    let modal_state = state.drafts.claim(draft_id)?;

    match send(state, &modal_state).await {
        Ok(message) => {
            state.drafts.close(draft_id, CloseReason::Submitted)?;
            Ok(message)
        }
        Err(error) => {
            state.drafts.release(draft_id)?;
            Err(error)
        }
    }
}

async fn send(
    state: &TransactionDraftState,
    modal_state: &ModalState,
) -> Result<&'static str, Error> {
    let open = modal_state.as_open().ok_or(Error::ModalClosed)?;
    if open.mode.is_read_only() {
        return Err(Error::ReadOnlyDraft);
    }

    let transaction = assemble(&open.draft)?;

    match open.mode {
        ModalMode::Create => {
            state.api.create_transaction(&transaction).await?;
            Ok("Transaction successfully added!")
        }
        ModalMode::Edit(transaction_id) => {
            state
                .api
                .update_transaction(transaction_id, &transaction)
                .await?;
            Ok("Transaction updated successfully!")
        }
        ModalMode::View(_) => Err(Error::ReadOnlyDraft),
    }
}
