//! The transactions page and the table it loads.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    ApiClient, AppState, Error,
    alert::Alert,
    currency::format_rupiah,
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, HxMethod, LINK_STYLE, MODAL_CONTAINER_ID, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, table_page,
    },
    loading_bar::LoadingBar,
    navigation::NavBar,
    timezone::get_local_offset,
    transaction::{TRANSACTIONS_CHANGED, Transaction, format_transaction_date},
};

/// The state needed for the transactions table.
#[derive(Debug, Clone)]
pub struct TransactionsTableState {
    /// The client for the POS server.
    pub api: ApiClient,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl FromRef<AppState> for TransactionsTableState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the transactions page. The table is loaded separately.
pub async fn get_transactions_page() -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    table_page(
        "Transaction",
        &nav_bar,
        "Add Transaction",
        endpoints::TRANSACTION_DRAFTS,
        HxMethod::Post,
        endpoints::TRANSACTIONS_TABLE,
        TRANSACTIONS_CHANGED,
    )
}

/// Render the transactions table with the latest transactions from the POS server.
pub async fn get_transactions_table(State(state): State<TransactionsTableState>) -> Response {
    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    let table = match state.api.list_transactions().await {
        Ok(transactions) => transactions_table(&transactions, local_offset),
        Err(error) => {
            tracing::error!("Could not load transactions: {error}");
            html!(
                p class="text-gray-500 dark:text-gray-400" { "Could not load transactions." }
                (Alert::Error {
                    message: "This didn't work.".to_owned(),
                    details: "The transactions could not be loaded from the POS server.".to_owned(),
                }.into_html())
            )
        }
    };

    html!(
        (table)
        (LoadingBar::complete_oob())
    )
    .into_response()
}

fn transactions_table(transactions: &[Transaction], local_offset: UtcOffset) -> Markup {
    html!(
        table class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Customer Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount Paid" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount Change" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for (index, transaction) in transactions.iter().enumerate() {
                    (transaction_rows(index + 1, transaction, local_offset))
                }

                @if transactions.is_empty() {
                    tr
                    {
                        td colspan="7" class="px-6 py-4 text-center" { "No transactions yet." }
                    }
                }
            }
        }
    )
}

fn transaction_rows(number: usize, transaction: &Transaction, local_offset: UtcOffset) -> Markup {
    let details_id = format!("transaction-details-{}", transaction.id);
    let record_drafts = endpoints::format_endpoint(endpoints::TRANSACTION_RECORD_DRAFTS, transaction.id);

    html!(
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    aria-controls=(details_id)
                    aria-label="Show products"
                    onclick={"document.getElementById('" (details_id) "').classList.toggle('hidden')"}
                    class="me-2"
                {
                    "▸"
                }
                (number)
            }
            td class=(TABLE_CELL_STYLE) { (transaction.customer_name()) }
            td class=(TABLE_CELL_STYLE) { (format_rupiah(transaction.total)) }
            td class=(TABLE_CELL_STYLE) { (format_rupiah(transaction.amount_paid)) }
            td class=(TABLE_CELL_STYLE) { (format_rupiah(transaction.amount_change)) }
            td class=(TABLE_CELL_STYLE) { (format_transaction_date(&transaction.date, local_offset)) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    button
                        type="button"
                        hx-post={(record_drafts) "?mode=view"}
                        hx-target={"#" (MODAL_CONTAINER_ID)}
                        class=(LINK_STYLE)
                    {
                        "Detail"
                    }

                    button
                        type="button"
                        hx-post={(record_drafts) "?mode=edit"}
                        hx-target={"#" (MODAL_CONTAINER_ID)}
                        class=(LINK_STYLE)
                    {
                        "Edit"
                    }

                    button
                        type="button"
                        hx-delete=(endpoints::format_endpoint(endpoints::TRANSACTION_API, transaction.id))
                        hx-confirm={"Apakah anda yakin ingin menghapus transaksi " (transaction.customer_name()) "?"}
                        hx-swap="none"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }

        tr id=(details_id) class="hidden bg-gray-50 dark:bg-gray-900"
        {
            td colspan="7" class="px-10 py-3"
            {
                table class="w-full text-sm"
                {
                    thead
                    {
                        tr
                        {
                            th scope="col" class="py-1 text-left" { "Product Name" }
                            th scope="col" class="py-1 text-left" { "Quantity" }
                            th scope="col" class="py-1 text-left" { "Subtotal" }
                        }
                    }

                    tbody
                    {
                        @for detail in &transaction.transaction_details {
                            tr
                            {
                                td class="py-1" { (detail.product_name()) }
                                td class="py-1" { (detail.quantity) }
                                td class="py-1"
                                {
                                    @match detail.subtotal() {
                                        Some(subtotal) => (format_rupiah(subtotal)),
                                        None => "-",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
