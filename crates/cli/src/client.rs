//! HTTP client for the storefront catalog and order endpoints.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use tinyshop_core::{OrderAck, OrderSubmission, Product, ProductId};

/// Errors talking to the storefront.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failed or the body could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// An endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the storefront API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client for the storefront at `base_url`.
    ///
    /// `base_url` should end in `/` (see [`crate::config::CliConfig`]).
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    /// Storefront base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on connection failure or a non-success status.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.inner.base_url.join("api/products")?;
        let response = self.inner.client.get(url).send().await?;
        let response = check_status(response).await?;
        let products: Vec<Product> = response.json().await?;

        debug!(count = products.len(), "Fetched catalog");
        Ok(products)
    }

    /// Fetch one product, `None` if the server does not know it.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on connection failure or an error status other
    /// than 404.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ClientError> {
        let url = self.inner.base_url.join(&format!("api/products/{id}"))?;
        let response = self.inner.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = check_status(response).await?;
        Ok(Some(response.json().await?))
    }

    /// Post an order to the mock order endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on connection failure or a non-success status.
    #[instrument(skip(self, order), fields(lines = order.cart.len(), total = %order.total))]
    pub async fn submit_order(&self, order: &OrderSubmission) -> Result<OrderAck, ClientError> {
        let url = self.inner.base_url.join("api/cart")?;
        let response = self.inner.client.post(url).json(order).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn error statuses into `ClientError::Status`, using the server's
/// `{"error": ...}` message when there is one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|body| body.error)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string());

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
