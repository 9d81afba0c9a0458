//! A stand-in for the POS server, served on an ephemeral local port.

use std::{
    collections::HashMap,
    net::TcpListener as StdTcpListener,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::{
    ApiClient, ApiConfig, customer::Customer, product::Product, transaction::Transaction,
};

/// A request the stub received.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Value,
}

/// Builder for a stub POS server.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubApi {
    lists: HashMap<&'static str, Value>,
    write_status: Option<StatusCode>,
    response_delay: Option<Duration>,
}

#[derive(Debug, Clone)]
struct StubState {
    lists: Arc<HashMap<&'static str, Value>>,
    write_status: Option<StatusCode>,
    response_delay: Option<Duration>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A stub POS server that is accepting requests.
pub(crate) struct RunningStub {
    /// The base URL to configure the API client with.
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RunningStub {
    /// The create, update and delete requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// An API client pointed at the stub.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig::new(&self.url, Duration::from_secs(2)).unwrap()).unwrap()
    }
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
            .with_products(Vec::new())
            .with_customers(Vec::new())
            .with_transactions(Vec::new())
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.with_raw_list("product", json!({ "data": products }))
    }

    pub fn with_customers(self, customers: Vec<Customer>) -> Self {
        self.with_raw_list("customer", json!({ "data": customers }))
    }

    pub fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
        self.with_raw_list("transaction", json!({ "data": transactions }))
    }

    /// Respond to `GET /api/{resource}` with `body` as is.
    pub fn with_raw_list(mut self, resource: &'static str, body: Value) -> Self {
        self.lists.insert(resource, body);
        self
    }

    /// Respond to every POST, PUT and DELETE with `status`.
    ///
    /// By default creates get 201 Created and updates and deletes get 200 OK.
    pub fn with_write_status(mut self, status: StatusCode) -> Self {
        self.write_status = Some(status);
        self
    }

    /// Wait this long before answering any request.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = Some(delay);
        self
    }

    /// Start serving on `127.0.0.1` on a free port.
    pub async fn serve(self) -> RunningStub {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            lists: Arc::new(self.lists),
            write_status: self.write_status,
            response_delay: self.response_delay,
            requests: requests.clone(),
        };

        let router = Router::new()
            .route("/api/{resource}", get(list).post(write))
            .route("/api/{resource}/{id}", axum::routing::put(write).delete(write))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind stub API listener");
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("stub API stopped unexpectedly");
        });

        RunningStub {
            url: format!("http://{address}"),
            requests,
        }
    }
}

async fn list(Path(resource): Path<String>, State(state): State<StubState>) -> Response {
    if let Some(delay) = state.response_delay {
        tokio::time::sleep(delay).await;
    }

    match state.lists.get(resource.as_str()) {
        Some(body) => Json(body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn write(method: Method, uri: Uri, State(state): State<StubState>, body: Bytes) -> Response {
    if let Some(delay) = state.response_delay {
        tokio::time::sleep(delay).await;
    }

    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_owned(),
        body: body.clone(),
    });

    let status = state.write_status.unwrap_or(if method == Method::POST {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    });

    (status, Json(json!({ "data": body }))).into_response()
}

/// A URL on which nothing is listening, so connections are refused.
pub(crate) fn unreachable_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("could not bind listener");
    let address = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{address}")
}
