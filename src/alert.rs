//! Alert system for displaying success and error messages to users.
//!
//! Alerts replace the `#alert-container` element at the bottom of every page
//! with an out-of-band swap, so an alert can ride along with any other
//! response content or be the whole response.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// A message to show the user in the alert container.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message that needs no explanation.
    SuccessSimple {
        /// The headline of the alert.
        message: String,
    },
    /// An error message with instructions on how to fix the error.
    Error {
        /// The headline of the alert.
        message: String,
        /// The text under the headline.
        details: String,
    },
}

impl Alert {
    /// Render the alert as the `#alert-container` element.
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::SuccessSimple { message } => (false, message, String::new()),
            Alert::Error { message, details } => (true, message, details),
        };

        let container_style = if is_error {
            "flex items-start gap-3 p-4 rounded-lg border shadow-lg \
            text-red-800 bg-red-50 border-red-300 \
            dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
        } else {
            "flex items-start gap-3 p-4 rounded-lg border shadow-lg \
            text-green-800 bg-green-50 border-green-300 \
            dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
        };

        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div
                    class=(container_style)
                    role="alert"
                    data-alert-kind=(if is_error { "error" } else { "success" })
                {
                    div class="flex-1"
                    {
                        p class="text-sm font-medium" { (message) }

                        @if !details.is_empty() {
                            p class="mt-1 text-sm" { (details) }
                        }
                    }

                    button
                        type="button"
                        class="ms-auto text-sm font-medium underline"
                        aria-label="Dismiss"
                        onclick="this.closest('#alert-container').replaceChildren()"
                    {
                        "Dismiss"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (StatusCode::OK, Html(self.into_html().into_string())).into_response()
    }
}

#[cfg(test)]
mod alert_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::{
        alert::Alert,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn error_alert_has_message_and_details() {
        let response = Alert::Error {
            message: "Missing value".to_owned(),
            details: "Product name cannot be empty.".to_owned(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let paragraphs = html
            .select(&Selector::parse("#alert-container p").unwrap())
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(paragraphs, ["Missing value", "Product name cannot be empty."]);

        let kind = html
            .select(&Selector::parse("[role=alert]").unwrap())
            .next()
            .expect("could not find alert")
            .attr("data-alert-kind");
        assert_eq!(kind, Some("error"));
    }

    #[tokio::test]
    async fn simple_alert_omits_details() {
        let html = parse_html_fragment(
            Alert::SuccessSimple {
                message: "Customer deleted".to_owned(),
            }
            .into_response(),
        )
        .await;

        let count = html
            .select(&Selector::parse("#alert-container p").unwrap())
            .count();
        assert_eq!(count, 1);

        let kind = html
            .select(&Selector::parse("[role=alert]").unwrap())
            .next()
            .expect("could not find alert")
            .attr("data-alert-kind");
        assert_eq!(kind, Some("success"));
    }

    #[test]
    fn alert_is_swapped_out_of_band() {
        let markup = Alert::Error {
            message: "This didn't work.".to_owned(),
            details: String::new(),
        }
        .into_html()
        .into_string();

        assert!(markup.contains(r#"hx-swap-oob="true""#), "got {markup}");
        assert!(markup.contains(r#"data-alert-kind="error""#), "got {markup}");
    }
}
