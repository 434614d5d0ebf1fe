use reqwest::Client;
use thiserror::Error;

use crate::catalog::types::Product;
use crate::config::CatalogConfig;

/// Errors that can occur while retrieving the catalog.
///
/// None of them are retried; the table stays empty for the session.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Connection, TLS or timeout failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of products.
    #[error("Failed to decode catalog response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// User-facing summary for the failure notification.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Client { .. } | FetchError::Transport { .. } => {
                "Failed to load products: the catalog is unreachable"
            }
            FetchError::Status { .. } => "Failed to load products: the catalog rejected the request",
            FetchError::Decode { .. } => "Failed to load products: unexpected catalog data",
        }
    }
}

/// Read-only client for the product catalog endpoint.
pub struct CatalogClient {
    client: Client,
    url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the full product list.
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, FetchError> {
        tracing::info!(url = %self.url, "Fetching catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Decode { source })?;

        tracing::info!(count = products.len(), "Catalog loaded");
        Ok(products)
    }
}
