//! Implements a struct that holds the state of the dashboard server.

use axum::extract::FromRef;

use crate::{
    ApiClient, Error, config::ApiConfig, drafts::DraftStore, timezone::get_local_offset,
};

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the POS server that owns all records.
    pub api: ApiClient,

    /// The transaction modals that are currently open.
    pub drafts: DraftStore,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that talks to the POS server described by `api_config`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Jakarta".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone,
    /// or an error if the HTTP client cannot be built.
    pub fn new(api_config: &ApiConfig, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            api: ApiClient::new(api_config)?,
            drafts: DraftStore::new(),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

// Handlers that only forward requests to the POS server extract the client on its own.
impl FromRef<AppState> for ApiClient {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}
