//! The lifecycle of the transaction modal: opening it empty or from a saved
//! transaction, changing the draft while it is open, and closing it.

use serde::Deserialize;

use crate::{
    Error,
    catalog::Catalog,
    currency,
    order::{
        draft::{DraftAction, OrderDraft},
        line_items::{ProductRef, Quantity},
    },
    transaction::{Transaction, TransactionDetail, TransactionId},
};

/// What the transaction modal was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    /// Put together a new transaction.
    Create,
    /// Change a saved transaction.
    Edit(TransactionId),
    /// Look at a saved transaction without changing it.
    View(TransactionId),
}

impl ModalMode {
    /// Whether the draft may be changed and submitted.
    pub fn is_read_only(self) -> bool {
        matches!(self, ModalMode::View(_))
    }

    /// The heading of the modal.
    pub fn title(self) -> &'static str {
        match self {
            ModalMode::Create => "Create New Transaction",
            ModalMode::Edit(_) => "Edit Transaction",
            ModalMode::View(_) => "Transaction Details",
        }
    }
}

/// Why the transaction modal was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The user pressed the close or cancel button.
    Cancel,
    /// The user pressed the mouse on the page outside the modal.
    OutsideClick,
    /// The transaction was accepted by the POS server.
    Submitted,
}

/// An open transaction modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenModal {
    /// What the modal was opened for.
    pub mode: ModalMode,
    /// The transaction being put together.
    pub draft: OrderDraft,
    /// The products and customers to choose from.
    pub catalog: Catalog,
    /// Problems found while filling the draft from a saved transaction.
    pub warnings: Vec<String>,
}

/// The state of the transaction modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    /// The modal is not shown.
    Closed,
    /// The modal is shown.
    Open(OpenModal),
}

impl ModalState {
    /// Open the modal with an empty draft for a new transaction.
    pub fn open_create(catalog: Catalog) -> Self {
        ModalState::Open(OpenModal {
            mode: ModalMode::Create,
            draft: OrderDraft::new(),
            catalog,
            warnings: Vec::new(),
        })
    }

    /// Open the modal to change `transaction`, filling the draft from it.
    pub fn open_edit(transaction: &Transaction, catalog: Catalog) -> Self {
        Self::open_saved(ModalMode::Edit(transaction.id), transaction, catalog)
    }

    /// Open the modal to look at `transaction`.
    pub fn open_view(transaction: &Transaction, catalog: Catalog) -> Self {
        Self::open_saved(ModalMode::View(transaction.id), transaction, catalog)
    }

    fn open_saved(mode: ModalMode, transaction: &Transaction, catalog: Catalog) -> Self {
        let (draft, warnings) = rehydrate(transaction, &catalog);

        for warning in &warnings {
            tracing::warn!("Transaction {}: {warning}", transaction.id);
        }

        ModalState::Open(OpenModal {
            mode,
            draft,
            catalog,
            warnings,
        })
    }

    /// Close the modal, discarding the draft.
    pub fn close(self, reason: CloseReason) -> Self {
        if let ModalState::Open(modal) = &self {
            tracing::debug!("Closing transaction modal {:?} because of {reason:?}", modal.mode);
        }

        ModalState::Closed
    }

    /// Apply `action` to the draft and return the new state.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::ModalClosed] if the modal is closed,
    /// - [Error::ReadOnlyDraft] if the modal was opened for viewing,
    /// - [Error::InvalidQuantity] if a product is added with a quantity less than one.
    pub fn apply(&self, action: &DraftAction) -> Result<Self, Error> {
        let modal = match self {
            ModalState::Closed => return Err(Error::ModalClosed),
            ModalState::Open(modal) => modal,
        };

        if modal.mode.is_read_only() {
            return Err(Error::ReadOnlyDraft);
        }

        let draft = modal.draft.apply(action)?;

        Ok(ModalState::Open(OpenModal {
            draft,
            ..modal.clone()
        }))
    }

    /// The open modal, or `None` if the modal is closed.
    pub fn as_open(&self) -> Option<&OpenModal> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(modal) => Some(modal),
        }
    }

    /// Whether the modal is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }
}

/// Build a draft from a saved transaction, resolving its IDs against `catalog`.
fn rehydrate(transaction: &Transaction, catalog: &Catalog) -> (OrderDraft, Vec<String>) {
    let mut warnings = Vec::new();
    let mut draft = OrderDraft::new().with_amount_paid(transaction.amount_paid);

    match catalog.customer(transaction.customer_id) {
        Some(customer) => draft = draft.with_customer(Some(customer.id)),
        None => warnings.push(format!(
            "{} is no longer in the customer list, choose a customer again.",
            transaction.customer_name()
        )),
    }

    for detail in &transaction.transaction_details {
        let quantity = match Quantity::new(detail.quantity) {
            Ok(quantity) => quantity,
            Err(_) => {
                warnings.push(format!(
                    "{} was skipped because its quantity {} is not valid.",
                    detail.product_name(),
                    detail.quantity
                ));
                continue;
            }
        };

        let product = match catalog.product_ref(detail.product_id) {
            Some(product) => product,
            None => {
                let (product, warning) = missing_product(detail);
                warnings.push(warning);
                product
            }
        };

        draft.line_items.add_quantity(&product, quantity);
    }

    if draft.total() != transaction.total {
        warnings.push(format!(
            "The products add up to {}, but the saved total is {}.",
            currency::format_rupiah(draft.total()),
            currency::format_rupiah(transaction.total)
        ));
    }

    (draft, warnings)
}

/// A stand-in for a product that is no longer in the catalog.
///
/// Uses the product the server embedded in the detail if there is one,
/// otherwise a placeholder priced at zero.
fn missing_product(detail: &TransactionDetail) -> (ProductRef, String) {
    match &detail.product {
        Some(embedded) => (
            ProductRef {
                id: detail.product_id,
                name: format!("{} (no longer in catalog)", embedded.name),
                unit_price: embedded.price,
            },
            format!(
                "{} is no longer in the product list, its saved price is used.",
                embedded.name
            ),
        ),
        None => (
            ProductRef {
                id: detail.product_id,
                name: format!("Unknown product #{}", detail.product_id),
                unit_price: 0,
            },
            format!(
                "Product #{} is no longer in the product list and is shown with a price of zero.",
                detail.product_id
            ),
        ),
    }
}
