//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};
use maud::{Markup, html};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    customer::{
        create_customer_endpoint, delete_customer_endpoint, get_customer_modal,
        get_customers_page, get_customers_table, get_edit_customer_modal, get_new_customer_modal,
        update_customer_endpoint,
    },
    dashboard::get_dashboard_page,
    endpoints,
    internal_server_error::get_internal_server_error_page,
    loading_bar::get_loading_progress,
    not_found::get_404_not_found,
    product::{
        create_product_endpoint, delete_product_endpoint, get_edit_product_modal,
        get_new_product_modal, get_product_modal, get_products_page, get_products_table,
        update_product_endpoint,
    },
    transaction::{
        add_draft_item, close_transaction_draft, delete_transaction_endpoint,
        get_transactions_page, get_transactions_table, open_record_draft, open_transaction_draft,
        remove_draft_item, select_draft_customer, set_draft_amount_paid, submit_transaction_draft,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::LOADING_PROGRESS, get(get_loading_progress))
        .route(endpoints::CLOSE_MODAL, get(close_modal));

    let product_routes = Router::new()
        .route(endpoints::PRODUCTS_VIEW, get(get_products_page))
        .route(endpoints::PRODUCTS_TABLE, get(get_products_table))
        .route(endpoints::NEW_PRODUCT_MODAL, get(get_new_product_modal))
        .route(endpoints::EDIT_PRODUCT_MODAL, get(get_edit_product_modal))
        .route(endpoints::PRODUCT_MODAL, get(get_product_modal))
        .route(endpoints::PRODUCTS_API, post(create_product_endpoint))
        .route(
            endpoints::PRODUCT_API,
            put(update_product_endpoint).delete(delete_product_endpoint),
        );

    let customer_routes = Router::new()
        .route(endpoints::CUSTOMERS_VIEW, get(get_customers_page))
        .route(endpoints::CUSTOMERS_TABLE, get(get_customers_table))
        .route(endpoints::NEW_CUSTOMER_MODAL, get(get_new_customer_modal))
        .route(endpoints::EDIT_CUSTOMER_MODAL, get(get_edit_customer_modal))
        .route(endpoints::CUSTOMER_MODAL, get(get_customer_modal))
        .route(endpoints::CUSTOMERS_API, post(create_customer_endpoint))
        .route(
            endpoints::CUSTOMER_API,
            put(update_customer_endpoint).delete(delete_customer_endpoint),
        );

    let transaction_routes = Router::new()
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSACTIONS_TABLE, get(get_transactions_table))
        .route(endpoints::TRANSACTION_DRAFTS, post(open_transaction_draft))
        .route(endpoints::TRANSACTION_RECORD_DRAFTS, post(open_record_draft))
        .route(endpoints::TRANSACTION_DRAFT, delete(close_transaction_draft))
        .route(endpoints::DRAFT_CUSTOMER, put(select_draft_customer))
        .route(endpoints::DRAFT_ITEMS, post(add_draft_item))
        .route(endpoints::DRAFT_ITEM, delete(remove_draft_item))
        .route(endpoints::DRAFT_AMOUNT_PAID, put(set_draft_amount_paid))
        .route(endpoints::DRAFT_SUBMIT, post(submit_transaction_draft))
        .route(
            endpoints::TRANSACTION_API,
            delete(delete_transaction_endpoint),
        );

    page_routes
        .merge(product_routes)
        .merge(customer_routes)
        .merge(transaction_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

/// Empty the modal container.
async fn close_modal() -> Markup {
    html!()
}
