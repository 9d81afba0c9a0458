//! The dashboard page with the number of products, customers and transactions.

use axum::extract::State;
use maud::{Markup, html};

use crate::{
    ApiClient, Error,
    currency, endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// One of the counters on the dashboard.
struct CountCard<'a> {
    title: &'a str,
    count: Result<usize, Error>,
    link: &'a str,
}

impl CountCard<'_> {
    fn into_html(self) -> Markup {
        let count = match &self.count {
            Ok(count) => currency::format(*count as u64),
            Err(_) => "-".to_owned(),
        };

        html!(
            div
                class="bg-white dark:bg-gray-800 border border-gray-200
                    dark:border-gray-700 rounded-lg p-6 shadow-md
                    hover:shadow-lg transition-shadow flex flex-col gap-2"
                data-count-card=(self.title)
            {
                h2 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (self.title) }
                p class="text-4xl font-bold" { (count) }
                a href=(self.link) class={(LINK_STYLE) " text-sm"} { "View all" }
            }
        )
    }
}

/// Display the dashboard.
///
/// The three lists are fetched at the same time. A list that cannot be
/// loaded shows `-` without affecting the other counters.
pub async fn get_dashboard_page(State(api): State<ApiClient>) -> Markup {
    let (products, customers, transactions) = tokio::join!(
        api.list_products(),
        api.list_customers(),
        api.list_transactions()
    );

    let cards = [
        CountCard {
            title: "Total Products",
            count: products.map(|products| products.len()),
            link: endpoints::PRODUCTS_VIEW,
        },
        CountCard {
            title: "Total Customers",
            count: customers.map(|customers| customers.len()),
            link: endpoints::CUSTOMERS_VIEW,
        },
        CountCard {
            title: "Total Transactions",
            count: transactions.map(|transactions| transactions.len()),
            link: endpoints::TRANSACTIONS_VIEW,
        },
    ];

    let failed = cards
        .iter()
        .filter_map(|card| match &card.count {
            Ok(_) => None,
            Err(error) => {
                tracing::error!("Could not load {}: {error}", card.title);
                Some(card.title)
            }
        })
        .collect::<Vec<_>>();

    let failure_details = (!failed.is_empty()).then(|| {
        format!(
            "{} could not be loaded from the POS server.",
            failed.join(", ")
        )
    });

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl"
            {
                h1 class="text-xl font-bold mb-4" { "Dashboard" }

                @if let Some(details) = failure_details {
                    div
                        role="alert"
                        class="mb-4 p-4 rounded-lg border text-red-800 bg-red-50 border-red-300
                            dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
                    {
                        p class="text-sm font-medium" { "Could not load everything" }
                        p class="mt-1 text-sm" { (details) }
                    }
                }

                div class="grid grid-cols-1 md:grid-cols-3 gap-4"
                {
                    @for card in cards {
                        (card.into_html())
                    }
                }
            }
        }
    );

    base("Dashboard", &content)
}

#[cfg(test)]
mod dashboard_tests {
    use axum::extract::State;
    use scraper::Html;
    use serde_json::json;

    use crate::{
        customer::Customer,
        dashboard::get_dashboard_page,
        product::Product,
        test_utils::{StubApi, assert_valid_html, select_texts},
    };

    fn product(id: i64) -> Product {
        Product {
            id,
            name: format!("Produk {id}"),
            price: 1_000,
            category: "ATK".to_owned(),
        }
    }

    #[tokio::test]
    async fn shows_counts() {
        let stub = StubApi::new()
            .with_products((1..=1_200).map(product).collect())
            .with_customers(vec![Customer {
                id: 1,
                name: "Budi".to_owned(),
                domicile: "Bandung".to_owned(),
                gender: "male".to_owned(),
            }])
            .serve()
            .await;

        let markup = get_dashboard_page(State(stub.client())).await;

        let html = Html::parse_document(&markup.into_string());
        assert_valid_html(&html);
        assert_eq!(select_texts(&html, "[data-count-card] p"), ["1.200", "1", "0"]);
        assert_eq!(
            select_texts(&html, "[data-count-card] h2"),
            ["Total Products", "Total Customers", "Total Transactions"]
        );
        assert!(select_texts(&html, "[role=alert]").is_empty());
    }

    #[tokio::test]
    async fn failed_count_shows_dash_and_alert() {
        let stub = StubApi::new()
            .with_products(vec![product(1)])
            .with_raw_list("customer", json!({ "data": null }))
            .serve()
            .await;

        let markup = get_dashboard_page(State(stub.client())).await;

        let html = Html::parse_document(&markup.into_string());
        assert_eq!(select_texts(&html, "[data-count-card] p"), ["1", "-", "0"]);
        let alert = select_texts(&html, "[role=alert] p");
        assert_eq!(alert[0], "Could not load everything");
        assert!(alert[1].contains("Total Customers"), "got {alert:?}");
    }
}
