//! Kasirin is a point-of-sale admin dashboard for managing customers, products
//! and sales transactions.
//!
//! This library serves HTML pages (enhanced with htmx) and forwards every
//! create, update and delete to a remote REST API. The only state it keeps is
//! the transaction drafts of open transaction modals.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod catalog;
mod config;
mod currency;
mod customer;
mod dashboard;
mod drafts;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod loading_bar;
mod logging;
mod navigation;
mod not_found;
mod order;
mod product;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::ApiClient;
pub use app_state::AppState;
pub use config::{ApiConfig, DEFAULT_API_TIMEOUT_SECS};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
