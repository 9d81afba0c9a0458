//! Renders the transaction modal from an open draft.

use maud::{Markup, html};

use crate::{
    currency::{self, format_rupiah},
    drafts::DraftId,
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        HxMethod, MODAL_CONTAINER_ID, ModalClose, cancel_button, currency_input, modal,
        select_input,
    },
    order::{ModalMode, OpenModal},
};

/// The ID of the part of the modal that changes with the customer and amount paid.
pub(super) const SUMMARY_ID: &str = "transaction-summary";

/// Render the whole transaction modal for draft `draft_id`.
pub(super) fn transaction_modal(draft_id: DraftId, open: &OpenModal) -> Markup {
    let read_only = open.mode.is_read_only();
    let close = draft_close(draft_id);

    let body = html!(
        @if !open.warnings.is_empty() {
            ul
                id="transaction-warnings"
                class="mb-4 p-3 rounded text-sm text-yellow-800 bg-yellow-50 dark:bg-gray-700 dark:text-yellow-300"
            {
                @for warning in &open.warnings {
                    li { (warning) }
                }
            }
        }

        div class="grid gap-6 md:grid-cols-2"
        {
            div class="space-y-4"
            {
                (customer_field(draft_id, open))
                (line_items(draft_id, open))

                @if read_only {
                    div
                    {
                        label for="total" class=(FORM_LABEL_STYLE) { "Total" }
                        (currency_input("total", "total", Some(open.draft.total()), true))
                    }
                }

                (amount_paid_field(draft_id, open))

                @if read_only {
                    div
                    {
                        label for="amount_change" class=(FORM_LABEL_STYLE) { "Amount Change" }
                        (currency_input(
                            "amount_change",
                            "amount_change",
                            Some(open.draft.amount_change().unwrap_or_default()),
                            true,
                        ))
                    }
                }

                (transaction_summary(draft_id, open))
            }

            @if !read_only {
                (add_product_form(draft_id, open))
            }
        }
    );

    modal(open.mode.title(), &close, &body)
}

/// Render the part of the modal below the amount paid: the change and the buttons.
///
/// This is swapped on its own when the customer or amount paid changes, so
/// the amount paid input keeps its focus.
pub(super) fn transaction_summary(draft_id: DraftId, open: &OpenModal) -> Markup {
    let submit_url = draft_url(endpoints::DRAFT_SUBMIT, draft_id);
    let submit_text = match open.mode {
        ModalMode::Create => Some("Add Transaction"),
        ModalMode::Edit(_) => Some("Update Transaction"),
        ModalMode::View(_) => None,
    };

    html!(
        div id=(SUMMARY_ID) class="space-y-4"
        {
            @if let Some(submit_text) = submit_text {
                p id="amount-change" class="text-sm"
                {
                    @match open.draft.amount_change() {
                        Some(change) => { "Amount Change: " (format_rupiah(change)) }
                        None => span class="text-red-500" { "The amount paid is less than the total." }
                    }
                }

                div class="flex gap-3 pt-2"
                {
                    (cancel_button(&draft_close(draft_id)))

                    button
                        type="button"
                        hx-post=(submit_url)
                        hx-include="[name='amount_paid']"
                        hx-target={"#" (MODAL_CONTAINER_ID)}
                        hx-disabled-elt="this"
                        disabled[!open.draft.is_submittable()]
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        (submit_text)
                    }
                }
            } @else {
                div class="flex gap-3 pt-2"
                {
                    (cancel_button(&draft_close(draft_id)))
                }
            }
        }
    )
}

fn customer_field(draft_id: DraftId, open: &OpenModal) -> Markup {
    let read_only = open.mode.is_read_only();
    let options = open
        .catalog
        .customers
        .iter()
        .map(|customer| (customer.id.to_string(), customer.name.clone()))
        .collect::<Vec<_>>();
    let options = options
        .iter()
        .map(|(value, label)| (value.as_str(), label.as_str()))
        .collect::<Vec<_>>();
    let selected = open
        .draft
        .customer_id
        .map(|customer_id| customer_id.to_string())
        .unwrap_or_default();

    html!(
        div
            hx-put=[(!read_only).then(|| draft_url(endpoints::DRAFT_CUSTOMER, draft_id))]
            hx-trigger="change"
            hx-include="[name='customer_id']"
            hx-target={"#" (SUMMARY_ID)}
            hx-swap="outerHTML"
        {
            label for="customer_id" class=(FORM_LABEL_STYLE) { "Customer" }
            (select_input(
                "customer_id",
                "customer_id",
                "Choose the customer",
                &options,
                &selected,
                read_only,
            ))
        }
    )
}

fn line_items(draft_id: DraftId, open: &OpenModal) -> Markup {
    let read_only = open.mode.is_read_only();

    html!(
        div
        {
            p class=(FORM_LABEL_STYLE) { "Added Products:" }

            ul id="line-items" class="space-y-1 text-sm"
            {
                @for item in open.draft.line_items.iter() {
                    li class="flex justify-between gap-2" data-product-id=(item.product_id)
                    {
                        span
                        {
                            (item.label) " (Qty: " (item.quantity) ") (Subtotal: "
                            (format_rupiah(item.subtotal())) ")"
                        }

                        @if !read_only {
                            button
                                type="button"
                                hx-delete=(endpoints::format_endpoint(
                                    &draft_url(endpoints::DRAFT_ITEM, draft_id),
                                    item.product_id,
                                ))
                                hx-target={"#" (MODAL_CONTAINER_ID)}
                                class=(BUTTON_DELETE_STYLE)
                            {
                                "Remove"
                            }
                        }
                    }
                }

                @if open.draft.line_items.is_empty() {
                    li class="text-gray-500 dark:text-gray-400" { "No products added yet." }
                }
            }
        }
    )
}

fn amount_paid_field(draft_id: DraftId, open: &OpenModal) -> Markup {
    let read_only = open.mode.is_read_only();
    let amount_paid = open.draft.amount_paid;

    html!(
        div
            hx-put=[(!read_only).then(|| draft_url(endpoints::DRAFT_AMOUNT_PAID, draft_id))]
            hx-trigger="input delay:300ms"
            hx-include="[name='amount_paid']"
            hx-target={"#" (SUMMARY_ID)}
            hx-swap="outerHTML"
        {
            label for="amount_paid" class=(FORM_LABEL_STYLE)
            {
                @if read_only {
                    "Amount Paid"
                } @else {
                    "Amount Paid (Total: Rp. " (currency::format(open.draft.total())) ")"
                }
            }

            (currency_input(
                "amount_paid",
                "amount_paid",
                (read_only || amount_paid > 0).then_some(amount_paid),
                read_only,
            ))
        }
    )
}

fn add_product_form(draft_id: DraftId, open: &OpenModal) -> Markup {
    let options = open
        .catalog
        .products
        .iter()
        .map(|product| {
            (
                product.id.to_string(),
                format!("{} - {}", product.name, format_rupiah(product.price)),
            )
        })
        .collect::<Vec<_>>();
    let options = options
        .iter()
        .map(|(value, label)| (value.as_str(), label.as_str()))
        .collect::<Vec<_>>();

    html!(
        form
            id="add-product-form"
            hx-post=(draft_url(endpoints::DRAFT_ITEMS, draft_id))
            hx-target={"#" (MODAL_CONTAINER_ID)}
            class="space-y-4"
        {
            div
            {
                label for="product_id" class=(FORM_LABEL_STYLE) { "Product" }
                (select_input("product_id", "product_id", "Choose the product", &options, "", false))
            }

            div
            {
                label for="quantity" class=(FORM_LABEL_STYLE) { "Quantity" }

                input
                    type="number"
                    name="quantity"
                    id="quantity"
                    min="1"
                    step="1"
                    value="1"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Product" }
        }
    )
}

fn draft_close(draft_id: DraftId) -> ModalClose {
    let url = draft_url(endpoints::TRANSACTION_DRAFT, draft_id);

    ModalClose {
        method: HxMethod::Delete,
        cancel_url: format!("{url}?reason=cancel"),
        outside_click_url: format!("{url}?reason=outside_click"),
    }
}

fn draft_url(endpoint: &str, draft_id: DraftId) -> String {
    endpoints::format_endpoint(endpoint, draft_id)
}

#[cfg(test)]
mod transaction_modal_tests {
    use scraper::Html;

    use crate::{
        catalog::Catalog,
        customer::Customer,
        order::{DraftAction, ModalState, OpenModal, ProductRef},
        product::Product,
        test_utils::{
            assert_hx_endpoint, assert_select_value, assert_valid_html, must_select,
            select_texts,
        },
        transaction::{EmbeddedCustomer, Transaction, TransactionDetail},
    };

    use super::{transaction_modal, transaction_summary};

    fn catalog() -> Catalog {
        Catalog {
            products: vec![
                Product {
                    id: 1,
                    name: "Pensil".to_owned(),
                    price: 5_000,
                    category: "ATK".to_owned(),
                },
                Product {
                    id: 2,
                    name: "Buku".to_owned(),
                    price: 3_000,
                    category: "ATK".to_owned(),
                },
            ],
            customers: vec![Customer {
                id: 4,
                name: "Budi".to_owned(),
                domicile: "Bandung".to_owned(),
                gender: "male".to_owned(),
            }],
        }
    }

    fn open(state: ModalState) -> OpenModal {
        state.as_open().unwrap().clone()
    }

    fn pencil() -> ProductRef {
        ProductRef {
            id: 1,
            name: "Pensil".to_owned(),
            unit_price: 5_000,
        }
    }

    fn saved_transaction() -> Transaction {
        Transaction {
            id: 9,
            customer_id: 4,
            total: 10_000,
            amount_paid: 12_000,
            amount_change: 2_000,
            date: "2025-05-01".to_owned(),
            transaction_details: vec![TransactionDetail {
                product_id: 1,
                quantity: 2,
                product: None,
            }],
            customer: Some(EmbeddedCustomer {
                name: "Budi".to_owned(),
            }),
        }
    }

    #[test]
    fn create_modal_starts_empty_with_disabled_submit() {
        let markup = transaction_modal(3, &open(ModalState::open_create(catalog())));
        let html = Html::parse_fragment(&markup.into_string());
        assert_valid_html(&html);

        assert_eq!(select_texts(&html, "h3"), ["Create New Transaction"]);
        assert_eq!(select_texts(&html, "#line-items li"), ["No products added yet."]);
        let submit = must_select(&html, "#transaction-summary button[hx-post]");
        assert_hx_endpoint(&submit, "/transactions/drafts/3/submit", "hx-post");
        assert!(submit.value().attr("disabled").is_some());
        let label = select_texts(&html, "label[for=amount_paid]");
        assert_eq!(label, ["Amount Paid (Total: Rp. 0)"]);
    }

    #[test]
    fn added_products_show_quantity_and_subtotal() {
        let state = ModalState::open_create(catalog())
            .apply(&DraftAction::AddProduct {
                product: pencil(),
                quantity: 3,
            })
            .unwrap();

        let html = Html::parse_fragment(&transaction_modal(3, &open(state)).into_string());

        assert_eq!(
            select_texts(&html, "#line-items li > span"),
            ["Pensil (Qty: 3) (Subtotal: Rp 15.000)"]
        );
        let remove = must_select(&html, "#line-items button[hx-delete]");
        assert_hx_endpoint(&remove, "/transactions/drafts/3/items/1", "hx-delete");
        assert_eq!(
            select_texts(&html, "label[for=amount_paid]"),
            ["Amount Paid (Total: Rp. 15.000)"]
        );
    }

    #[test]
    fn submit_is_enabled_once_customer_and_payment_are_set() {
        let state = ModalState::open_create(catalog())
            .apply(&DraftAction::AddProduct {
                product: pencil(),
                quantity: 2,
            })
            .and_then(|state| state.apply(&DraftAction::SelectCustomer(Some(4))))
            .and_then(|state| state.apply(&DraftAction::SetAmountPaid(12_000)))
            .unwrap();

        let markup = transaction_summary(3, &open(state));
        let html = Html::parse_fragment(&markup.into_string());

        let submit = must_select(&html, "button[hx-post]");
        assert!(submit.value().attr("disabled").is_none());
        assert_eq!(submit.value().attr("hx-disabled-elt"), Some("this"));
        assert_eq!(select_texts(&html, "#amount-change"), ["Amount Change: Rp 2.000"]);
    }

    #[test]
    fn edit_modal_is_filled_from_saved_transaction() {
        let state = ModalState::open_edit(&saved_transaction(), catalog());

        let html = Html::parse_fragment(&transaction_modal(5, &open(state)).into_string());
        assert_valid_html(&html);

        assert_eq!(select_texts(&html, "h3"), ["Edit Transaction"]);
        let form = must_select(&html, "#modal");
        assert_select_value(&form, "customer_id", "4");
        assert_eq!(
            select_texts(&html, "#transaction-summary button[hx-post]"),
            ["Update Transaction"]
        );
        let amount_paid = must_select(&html, "input[name=amount_paid]");
        assert_eq!(amount_paid.value().attr("value"), Some("12.000"));
    }

    #[test]
    fn view_modal_is_read_only() {
        let state = ModalState::open_view(&saved_transaction(), catalog());

        let html = Html::parse_fragment(&transaction_modal(5, &open(state)).into_string());
        assert_valid_html(&html);

        assert_eq!(select_texts(&html, "h3"), ["Transaction Details"]);
        assert!(html.select(&scraper::Selector::parse("[hx-post]").unwrap()).next().is_none());
        assert!(html.select(&scraper::Selector::parse("[hx-put]").unwrap()).next().is_none());
        assert!(must_select(&html, "select[name=customer_id]").value().attr("disabled").is_some());
        let total = must_select(&html, "input[name=total]");
        assert_eq!(total.value().attr("value"), Some("10.000"));
        let change = must_select(&html, "input[name=amount_change]");
        assert_eq!(change.value().attr("value"), Some("2.000"));
    }

    #[test]
    fn closing_sends_the_reason() {
        let html = Html::parse_fragment(
            &transaction_modal(8, &open(ModalState::open_create(catalog()))).into_string(),
        );

        let overlay = must_select(&html, "#modal-overlay");
        assert_hx_endpoint(
            &overlay,
            "/transactions/drafts/8?reason=outside_click",
            "hx-delete",
        );
        let cancel = must_select(&html, "#transaction-summary button[hx-delete]");
        assert_hx_endpoint(&cancel, "/transactions/drafts/8?reason=cancel", "hx-delete");
    }
}
