//! Putting a transaction together: line items, totals, payment checks,
//! the request body, and the modal the user does it in.

mod draft;
mod line_items;
mod modal;
mod payment;
mod submission;

pub use draft::{DraftAction, OrderDraft};
pub use line_items::{LineItem, LineItems, ProductRef, Quantity};
pub use modal::{CloseReason, ModalMode, ModalState, OpenModal};
pub use payment::is_submittable;
pub use submission::assemble;
