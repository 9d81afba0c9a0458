//! The products page and the table it loads.

use axum::extract::State;
use maud::{Markup, html};

use crate::{
    ApiClient,
    alert::Alert,
    currency, endpoints,
    html::{
        BUTTON_DELETE_STYLE, HxMethod, LINK_STYLE, MODAL_CONTAINER_ID, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, table_page,
    },
    loading_bar::LoadingBar,
    navigation::NavBar,
    product::{PRODUCTS_CHANGED, Product},
};

/// Render the products page. The table is loaded separately.
pub async fn get_products_page() -> Markup {
    let nav_bar = NavBar::new(endpoints::PRODUCTS_VIEW).into_html();

    table_page(
        "Product",
        &nav_bar,
        "Add Product",
        endpoints::NEW_PRODUCT_MODAL,
        HxMethod::Get,
        endpoints::PRODUCTS_TABLE,
        PRODUCTS_CHANGED,
    )
}

/// Render the products table with the latest products from the POS server.
pub async fn get_products_table(State(api): State<ApiClient>) -> Markup {
    let table = match api.list_products().await {
        Ok(products) => products_table(&products),
        Err(error) => {
            tracing::error!("Could not load products: {error}");
            html!(
                p class="text-gray-500 dark:text-gray-400" { "Could not load products." }
                (Alert::Error {
                    message: "This didn't work.".to_owned(),
                    details: "The products could not be loaded from the POS server.".to_owned(),
                }.into_html())
            )
        }
    };

    html!(
        (table)
        (LoadingBar::complete_oob())
    )
}

fn products_table(products: &[Product]) -> Markup {
    html!(
        table class=(TABLE_STYLE)
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "#" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Price" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for (index, product) in products.iter().enumerate() {
                    tr class=(TABLE_ROW_STYLE) data-product-id=(product.id)
                    {
                        td class=(TABLE_CELL_STYLE) { (index + 1) }
                        td class=(TABLE_CELL_STYLE) { (product.name) }
                        td class=(TABLE_CELL_STYLE) { (product.category) }
                        td class=(TABLE_CELL_STYLE) { (currency::format_rupiah(product.price)) }
                        td class=(TABLE_CELL_STYLE) { (product_actions(product)) }
                    }
                }

                @if products.is_empty() {
                    tr
                    {
                        td colspan="5" class="px-6 py-4 text-center" { "No products yet." }
                    }
                }
            }
        }
    )
}

fn product_actions(product: &Product) -> Markup {
    html!(
        div class="flex gap-4"
        {
            button
                type="button"
                hx-get=(endpoints::format_endpoint(endpoints::PRODUCT_MODAL, product.id))
                hx-target={"#" (MODAL_CONTAINER_ID)}
                class=(LINK_STYLE)
            {
                "Detail"
            }

            button
                type="button"
                hx-get=(endpoints::format_endpoint(endpoints::EDIT_PRODUCT_MODAL, product.id))
                hx-target={"#" (MODAL_CONTAINER_ID)}
                class=(LINK_STYLE)
            {
                "Edit"
            }

            button
                type="button"
                hx-delete=(endpoints::format_endpoint(endpoints::PRODUCT_API, product.id))
                hx-confirm={"Apakah anda yakin ingin menghapus produk " (product.name) "?"}
                hx-swap="none"
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    )
}

#[cfg(test)]
mod products_page_tests {
    use axum::extract::State;
    use scraper::Html;
    use serde_json::json;

    use crate::{
        endpoints,
        product::{Product, get_products_page, get_products_table},
        test_utils::{
            StubApi, alert_message, assert_hx_endpoint, assert_valid_html, must_select,
            select_texts,
        },
    };

    fn pensil() -> Product {
        Product {
            id: 7,
            name: "Pensil".to_owned(),
            price: 2500,
            category: "ATK".to_owned(),
        }
    }

    #[tokio::test]
    async fn page_loads_table_on_load_and_on_change() {
        let html = Html::parse_document(&get_products_page().await.into_string());
        assert_valid_html(&html);

        let container = must_select(&html, "#table-container");
        assert_hx_endpoint(&container, endpoints::PRODUCTS_TABLE, "hx-get");
        assert_hx_endpoint(&container, "load, products-changed from:body", "hx-trigger");

        let new_button = must_select(&html, "button[hx-get='/products/new']");
        assert_eq!(new_button.text().collect::<String>().trim(), "Add Product");
        must_select(&html, "#loading-bar");
    }

    #[tokio::test]
    async fn table_lists_products_with_rupiah_prices() {
        let stub = StubApi::new().with_products(vec![pensil()]).serve().await;

        let markup = get_products_table(State(stub.client())).await.into_string();
        let html = Html::parse_fragment(&markup);

        assert_valid_html(&html);
        assert_eq!(
            select_texts(&html, "tbody td")[..4],
            ["1", "Pensil", "ATK", "Rp 2.500"]
        );
        let delete = must_select(&html, "button[hx-delete]");
        assert_hx_endpoint(&delete, "/api/products/7", "hx-delete");
        assert_hx_endpoint(
            &delete,
            "Apakah anda yakin ingin menghapus produk Pensil?",
            "hx-confirm",
        );
        must_select(&html, "#loading-bar[hx-swap-oob]");
    }

    #[tokio::test]
    async fn table_says_when_there_are_no_products() {
        let stub = StubApi::new().serve().await;

        let markup = get_products_table(State(stub.client())).await.into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(select_texts(&html, "tbody td"), ["No products yet."]);
    }

    #[tokio::test]
    async fn table_shows_alert_when_products_cannot_be_loaded() {
        let stub = StubApi::new()
            .with_raw_list("product", json!({ "unexpected": true }))
            .serve()
            .await;

        let markup = get_products_table(State(stub.client())).await.into_string();
        let html = Html::parse_fragment(&markup);

        assert_eq!(alert_message(&html), "This didn't work.");
        assert!(select_texts(&html, "table").is_empty());
        // The bar still finishes so the page does not look stuck.
        must_select(&html, "#loading-bar[aria-valuenow='100']");
    }
}
