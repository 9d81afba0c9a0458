//! Forwards changes to a product from the product modal to the POS server.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    ApiClient,
    product::{
        ProductForm, ProductId,
        modal::{ProductModalMode, product_modal},
        products_changed,
    },
};

/// Handle the product modal's edit form.
pub async fn update_product_endpoint(
    Path(product_id): Path<ProductId>,
    State(api): State<ApiClient>,
    Form(form): Form<ProductForm>,
) -> Response {
    let product = match form.validate() {
        Ok(product) => product,
        Err(error) => {
            return product_modal(
                ProductModalMode::Edit(product_id),
                &form,
                Some(&format!("Error: {error}")),
            )
            .into_response();
        }
    };

    match api.update_product(product_id, &product).await {
        Ok(()) => products_changed("Product updated successfully!"),
        Err(error) => {
            tracing::error!("Could not update product {product_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod update_product_endpoint_tests {
    use axum::{
        Form,
        extract::{Path, State},
        http::StatusCode,
    };
    use serde_json::json;

    use crate::{
        product::{ProductForm, update_product_endpoint},
        test_utils::{
            StubApi, alert_message, assert_form_error_message, assert_hx_endpoint,
            assert_hx_trigger, assert_status_ok, must_get_form, parse_html_fragment,
        },
    };

    fn form(category: &str) -> ProductForm {
        ProductForm {
            name: "Wajan".to_owned(),
            price: "120.000".to_owned(),
            category: category.to_owned(),
        }
    }

    #[tokio::test]
    async fn updates_product() {
        let stub = StubApi::new().serve().await;

        let response =
            update_product_endpoint(Path(4), State(stub.client()), Form(form("Masak"))).await;

        assert_status_ok(&response);
        assert_hx_trigger(&response, "products-changed");
        let html = parse_html_fragment(response).await;
        assert_eq!(alert_message(&html), "Product updated successfully!");

        let requests = stub.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/api/product/4");
        assert_eq!(
            requests[0].body,
            json!({ "name": "Wajan", "price": 120000, "category": "Masak" })
        );
    }

    #[tokio::test]
    async fn unknown_category_is_shown_in_form() {
        let stub = StubApi::new().serve().await;

        let response =
            update_product_endpoint(Path(4), State(stub.client()), Form(form("Mainan"))).await;

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/api/products/4", "hx-put");
        assert_form_error_message(&form, "Error: \"Mainan\" is not a valid category");
    }

    #[tokio::test]
    async fn update_expects_ok_status() {
        let stub = StubApi::new()
            .with_write_status(StatusCode::CREATED)
            .serve()
            .await;

        let response =
            update_product_endpoint(Path(4), State(stub.client()), Form(form("Masak"))).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
