//! The endpoint URIs served by the dashboard.
//!
//! For endpoints that take a parameter, e.g., '/products/{product_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the number of products, customers and transactions.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";
/// The next step of the loading bar, takes the query parameter `progress`.
pub const LOADING_PROGRESS: &str = "/loading";
/// Empties the modal container, used by the product and customer modals.
pub const CLOSE_MODAL: &str = "/modal/close";

/// The page for listing products.
pub const PRODUCTS_VIEW: &str = "/products";
/// The fragment with the products table.
pub const PRODUCTS_TABLE: &str = "/products/table";
/// The modal for creating a product.
pub const NEW_PRODUCT_MODAL: &str = "/products/new";
/// The modal for editing a product.
pub const EDIT_PRODUCT_MODAL: &str = "/products/{product_id}/edit";
/// The modal for viewing a product.
pub const PRODUCT_MODAL: &str = "/products/{product_id}";

/// The page for listing customers.
pub const CUSTOMERS_VIEW: &str = "/customers";
/// The fragment with the customers table.
pub const CUSTOMERS_TABLE: &str = "/customers/table";
/// The modal for creating a customer.
pub const NEW_CUSTOMER_MODAL: &str = "/customers/new";
/// The modal for editing a customer.
pub const EDIT_CUSTOMER_MODAL: &str = "/customers/{customer_id}/edit";
/// The modal for viewing a customer.
pub const CUSTOMER_MODAL: &str = "/customers/{customer_id}";

/// The page for listing transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The fragment with the transactions table.
pub const TRANSACTIONS_TABLE: &str = "/transactions/table";
/// Opens the transaction modal for a new transaction.
pub const TRANSACTION_DRAFTS: &str = "/transactions/drafts";
/// Opens the transaction modal for a saved transaction, takes the query parameter `mode`.
pub const TRANSACTION_RECORD_DRAFTS: &str = "/transactions/{transaction_id}/drafts";
/// Closes a transaction modal, takes the query parameter `reason`.
pub const TRANSACTION_DRAFT: &str = "/transactions/drafts/{draft_id}";
/// Selects the customer of a transaction draft.
pub const DRAFT_CUSTOMER: &str = "/transactions/drafts/{draft_id}/customer";
/// Adds a product to a transaction draft.
pub const DRAFT_ITEMS: &str = "/transactions/drafts/{draft_id}/items";
/// Removes a product from a transaction draft.
pub const DRAFT_ITEM: &str = "/transactions/drafts/{draft_id}/items/{product_id}";
/// Sets the amount paid for a transaction draft.
pub const DRAFT_AMOUNT_PAID: &str = "/transactions/drafts/{draft_id}/amount_paid";
/// Sends a transaction draft to the POS server.
pub const DRAFT_SUBMIT: &str = "/transactions/drafts/{draft_id}/submit";

/// The route to create a product.
pub const PRODUCTS_API: &str = "/api/products";
/// The route to update or delete a product.
pub const PRODUCT_API: &str = "/api/products/{product_id}";
/// The route to create a customer.
pub const CUSTOMERS_API: &str = "/api/customers";
/// The route to update or delete a customer.
pub const CUSTOMER_API: &str = "/api/customers/{customer_id}";
/// The route to delete a transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/products/{product_id}', '{product_id}' is the parameter.
///
/// Endpoints with two parameters are filled in by calling this function twice.
///
/// This function assumes that an endpoint path only contains ASCII characters.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know the routes given to the router and
// the URLs put into HTML are valid URIs.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    #[track_caller]
    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "{uri} is not a valid URI");
    }

    #[test]
    fn endpoints_are_valid_uris() {
        let endpoints = [
            endpoints::ROOT,
            endpoints::DASHBOARD_VIEW,
            endpoints::INTERNAL_ERROR_VIEW,
            endpoints::STATIC,
            endpoints::LOADING_PROGRESS,
            endpoints::CLOSE_MODAL,
            endpoints::PRODUCTS_VIEW,
            endpoints::PRODUCTS_TABLE,
            endpoints::NEW_PRODUCT_MODAL,
            endpoints::EDIT_PRODUCT_MODAL,
            endpoints::PRODUCT_MODAL,
            endpoints::CUSTOMERS_VIEW,
            endpoints::CUSTOMERS_TABLE,
            endpoints::NEW_CUSTOMER_MODAL,
            endpoints::EDIT_CUSTOMER_MODAL,
            endpoints::CUSTOMER_MODAL,
            endpoints::TRANSACTIONS_VIEW,
            endpoints::TRANSACTIONS_TABLE,
            endpoints::TRANSACTION_DRAFTS,
            endpoints::TRANSACTION_RECORD_DRAFTS,
            endpoints::TRANSACTION_DRAFT,
            endpoints::DRAFT_CUSTOMER,
            endpoints::DRAFT_ITEMS,
            endpoints::DRAFT_ITEM,
            endpoints::DRAFT_AMOUNT_PAID,
            endpoints::DRAFT_SUBMIT,
            endpoints::PRODUCTS_API,
            endpoints::PRODUCT_API,
            endpoints::CUSTOMERS_API,
            endpoints::CUSTOMER_API,
            endpoints::TRANSACTION_API,
        ];

        for endpoint in endpoints {
            assert_endpoint_is_valid_uri(endpoint);
        }
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::EDIT_PRODUCT_MODAL, 12);

        assert_eq!(formatted_path, "/products/12/edit");
    }

    #[test]
    fn fills_two_parameters_in_order() {
        let formatted_path =
            format_endpoint(&format_endpoint(endpoints::DRAFT_ITEM, 3), 45);

        assert_eq!(formatted_path, "/transactions/drafts/3/items/45");
        assert_endpoint_is_valid_uri(&formatted_path);
    }
}
