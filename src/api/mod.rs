//! The HTTP client for the POS server that stores customers, products and transactions.

mod client;

pub use client::ApiClient;
