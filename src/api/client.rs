use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    Error,
    config::ApiConfig,
    customer::{Customer, CustomerId, NewCustomer},
    product::{NewProduct, Product, ProductId},
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The collections exposed by the POS server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// `/api/customer`
    Customer,
    /// `/api/product`
    Product,
    /// `/api/transaction`
    Transaction,
}

impl Resource {
    fn path(self) -> &'static str {
        match self {
            Resource::Customer => "customer",
            Resource::Product => "product",
            Resource::Transaction => "transaction",
        }
    }
}

/// The envelope the POS server wraps its lists in.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
}

/// A client for the POS server's REST API.
///
/// Cloning the client is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the server described by `config`.
    ///
    /// # Errors
    /// Returns [Error::Transport] if the HTTP client could not be set up.
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|error| {
                tracing::error!("Could not build the HTTP client: {error}");
                Error::Transport(error.to_string())
            })?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Get every product.
    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.list(Resource::Product).await
    }

    /// Create a product.
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), Error> {
        self.create(Resource::Product, product).await
    }

    /// Replace the product with the ID `id`.
    pub async fn update_product(&self, id: ProductId, product: &NewProduct) -> Result<(), Error> {
        self.update(Resource::Product, id, product).await
    }

    /// Delete the product with the ID `id`.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), Error> {
        self.delete(Resource::Product, id).await
    }

    /// Get every customer.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        self.list(Resource::Customer).await
    }

    /// Create a customer.
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<(), Error> {
        self.create(Resource::Customer, customer).await
    }

    /// Replace the customer with the ID `id`.
    pub async fn update_customer(
        &self,
        id: CustomerId,
        customer: &NewCustomer,
    ) -> Result<(), Error> {
        self.update(Resource::Customer, id, customer).await
    }

    /// Delete the customer with the ID `id`.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), Error> {
        self.delete(Resource::Customer, id).await
    }

    /// Get every transaction.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        self.list(Resource::Transaction).await
    }

    /// Create a transaction.
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<(), Error> {
        self.create(Resource::Transaction, transaction).await
    }

    /// Replace the transaction with the ID `id`.
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        transaction: &NewTransaction,
    ) -> Result<(), Error> {
        self.update(Resource::Transaction, id, transaction).await
    }

    /// Delete the transaction with the ID `id`.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        self.delete(Resource::Transaction, id).await
    }

    /// `GET /api/{resource}`, unwrapping the `data` list.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::Transport] if no response was received,
    /// - [Error::UnexpectedStatus] if the status is not 200 OK,
    /// - [Error::InvalidResponse] if the body is not a list of `T`.
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, Error> {
        let url = self.config.api_url(resource.path());
        let response = self
            .send(Method::GET, &url, StatusCode::OK, |request| request)
            .await?;

        let list: ListResponse<T> = response.json().await.map_err(|error| {
            tracing::error!("Could not decode the response from GET {url}: {error}");
            Error::InvalidResponse(error.to_string())
        })?;

        Ok(list.data)
    }

    /// `POST /api/{resource}`, expecting 201 Created.
    pub async fn create<B: Serialize>(&self, resource: Resource, body: &B) -> Result<(), Error> {
        let url = self.config.api_url(resource.path());

        self.send(Method::POST, &url, StatusCode::CREATED, |request| {
            request.json(body)
        })
        .await
        .map(|_| ())
    }

    /// `PUT /api/{resource}/{id}`, expecting 200 OK.
    pub async fn update<B: Serialize>(
        &self,
        resource: Resource,
        id: i64,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.config.api_url(&format!("{}/{id}", resource.path()));

        self.send(Method::PUT, &url, StatusCode::OK, |request| request.json(body))
            .await
            .map(|_| ())
    }

    /// `DELETE /api/{resource}/{id}`, expecting 200 OK.
    pub async fn delete(&self, resource: Resource, id: i64) -> Result<(), Error> {
        let url = self.config.api_url(&format!("{}/{id}", resource.path()));

        self.send(Method::DELETE, &url, StatusCode::OK, |request| request)
            .await
            .map(|_| ())
    }

    async fn send<F>(
        &self,
        method: Method,
        url: &str,
        expected_status: StatusCode,
        build: F,
    ) -> Result<reqwest::Response, Error>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let request = build(self.http.request(method.clone(), url));

        let response = request.send().await.map_err(|error| {
            tracing::error!("Could not send {method} {url}: {error}");
            Error::Transport(error.to_string())
        })?;

        let status = response.status();
        if status != expected_status {
            tracing::error!("{method} {url} responded with {status}, expected {expected_status}");
            return Err(Error::UnexpectedStatus {
                method: method.to_string(),
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        tracing::debug!("{method} {url} responded with {status}");
        Ok(response)
    }
}
