//! The product modal for creating, editing and viewing a product.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    ApiClient, Error,
    currency, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, ModalClose, cancel_button,
        currency_input, form_error, modal, select_input,
    },
    product::{PRODUCT_CATEGORIES, Product, ProductForm, ProductId},
};

/// What the product modal was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ProductModalMode {
    Create,
    Edit(ProductId),
    View,
}

impl ProductModalMode {
    fn title(self) -> &'static str {
        match self {
            ProductModalMode::Create => "Create New Product",
            ProductModalMode::Edit(_) => "Edit Product",
            ProductModalMode::View => "Product Details",
        }
    }
}

/// Render the modal for adding a product.
pub async fn get_new_product_modal() -> Markup {
    product_modal(ProductModalMode::Create, &ProductForm::default(), None)
}

/// Render the modal for editing product `product_id`, filled with its current values.
pub async fn get_edit_product_modal(
    Path(product_id): Path<ProductId>,
    State(api): State<ApiClient>,
) -> Response {
    match find_product(&api, product_id).await {
        Ok(product) => product_modal(
            ProductModalMode::Edit(product_id),
            &ProductForm::from(&product),
            None,
        )
        .into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Render the read-only modal for product `product_id`.
pub async fn get_product_modal(
    Path(product_id): Path<ProductId>,
    State(api): State<ApiClient>,
) -> Response {
    match find_product(&api, product_id).await {
        Ok(product) => {
            product_modal(ProductModalMode::View, &ProductForm::from(&product), None)
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}

/// The POS server has no endpoint for a single product, so look it up in the list.
async fn find_product(api: &ApiClient, product_id: ProductId) -> Result<Product, Error> {
    api.list_products()
        .await
        .inspect_err(|error| tracing::error!("Could not load product {product_id}: {error}"))?
        .into_iter()
        .find(|product| product.id == product_id)
        .ok_or(Error::NotFound)
}

pub(super) fn product_modal(
    mode: ProductModalMode,
    form: &ProductForm,
    error_message: Option<&str>,
) -> Markup {
    let read_only = mode == ProductModalMode::View;
    let create_endpoint = (mode == ProductModalMode::Create).then_some(endpoints::PRODUCTS_API);
    let update_endpoint = match mode {
        ProductModalMode::Edit(product_id) => {
            Some(endpoints::format_endpoint(endpoints::PRODUCT_API, product_id))
        }
        _ => None,
    };
    let price = (!currency::format_digits(&form.price).is_empty())
        .then(|| currency::parse(&form.price));
    let categories = PRODUCT_CATEGORIES.map(|category| (category, category));
    let close = ModalClose::get(endpoints::CLOSE_MODAL);

    let body = html!(
        form
            hx-post=[create_endpoint]
            hx-put=[update_endpoint]
            class="space-y-4"
        {
            div
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Product Name" }

                input
                    type="text"
                    name="name"
                    id="name"
                    value=(form.name)
                    placeholder="Enter product name"
                    required
                    readonly[read_only]
                    autofocus[!read_only]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="price" class=(FORM_LABEL_STYLE) { "Price" }
                (currency_input("price", "price", price, read_only))
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Product Category" }
                (select_input(
                    "category",
                    "category",
                    "Choose a category",
                    &categories,
                    &form.category,
                    read_only,
                ))
            }

            (form_error(error_message))

            div class="flex gap-3 pt-2"
            {
                (cancel_button(&close))

                @match mode {
                    ProductModalMode::Create => {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Product" }
                    }
                    ProductModalMode::Edit(_) => {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update Product" }
                    }
                    ProductModalMode::View => {}
                }
            }
        }
    );

    modal(mode.title(), &close, &body)
}
