//! The customers page and the table it loads.

use axum::extract::State;
use maud::{Markup, html};

use crate::{
    ApiClient,
    alert::Alert,
    customer::{CUSTOMERS_CHANGED, Customer, gender_label},
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, HxMethod, LINK_STYLE, MODAL_CONTAINER_ID, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, table_page,
    },
    loading_bar::LoadingBar,
    navigation::NavBar,
};

/// Render the customers page. The table is loaded separately.
pub async fn get_customers_page() -> Markup {
    let nav_bar = NavBar::new(endpoints::CUSTOMERS_VIEW).into_html();

    table_page(
        "Customer",
        &nav_bar,
        "Add Customer",
        endpoints::NEW_CUSTOMER_MODAL,
        HxMethod::Get,
        endpoints::CUSTOMERS_TABLE,
        CUSTOMERS_CHANGED,
    )
}

/// Render the customers table with the latest customers from the POS server.
pub async fn get_customers_table(State(api): State<ApiClient>) -> Markup {
    let table = match api.list_customers().await {
        Ok(customers) => customers_table(&customers),
        Err(error) => {
            tracing::error!("Could not load customers: {error}");
            html!(
                p class="text-gray-500 dark:text-gray-400" { "Could not load customers." }
                (Alert::Error {
                    message: "This didn't work.".to_owned(),
                    details: "The customers could not be loaded from the POS server.".to_owned(),
                }.into_html())
            )
        }
    };

    html!(
        (table)
        (LoadingBar::complete_oob())
    )
}

fn customers_table(customers: &[Customer]) -> Markup {
    html!(
        table class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Domicile" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Gender" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for (index, customer) in customers.iter().enumerate() {
                    tr class=(TABLE_ROW_STYLE) data-customer-id=(customer.id)
                    {
                        td class=(TABLE_CELL_STYLE) { (index + 1) }
                        td class=(TABLE_CELL_STYLE) { (customer.name) }
                        td class=(TABLE_CELL_STYLE) { (customer.domicile) }
                        td class=(TABLE_CELL_STYLE) { (gender_label(&customer.gender)) }
                        td class=(TABLE_CELL_STYLE)
                        {
                            div class="flex gap-4"
                            {
                                button
                                    type="button"
                                    hx-get=(endpoints::format_endpoint(endpoints::CUSTOMER_MODAL, customer.id))
                                    hx-target={"#" (MODAL_CONTAINER_ID)}
                                    class=(LINK_STYLE)
                                {
                                    "Detail"
                                }

                                button
                                    type="button"
                                    hx-get=(endpoints::format_endpoint(endpoints::EDIT_CUSTOMER_MODAL, customer.id))
                                    hx-target={"#" (MODAL_CONTAINER_ID)}
                                    class=(LINK_STYLE)
                                {
                                    "Edit"
                                }

                                button
                                    type="button"
                                    hx-delete=(endpoints::format_endpoint(endpoints::CUSTOMER_API, customer.id))
                                    hx-confirm={"Apakah anda yakin ingin menghapus customer " (customer.name) "?"}
                                    hx-swap="none"
                                    class=(BUTTON_DELETE_STYLE)
                                {
                                    "Delete"
                                }
                            }
                        }
                    }
                }

                @if customers.is_empty() {
                    tr
                    {
                        td colspan="5" class="px-6 py-4 text-center" { "No customers yet." }
                    }
                }
            }
        }
    )
}
