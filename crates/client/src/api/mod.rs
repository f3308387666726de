//! Medusa Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This client carries the admin bearer token, which has full access to
//! the store.** Only point it at stores you administer.
//!
//! # Architecture
//!
//! - Plain REST calls via `reqwest`, JSON bodies deserialized with serde
//! - Direct API calls to the store (no local database, no caching)
//! - Offset pagination for listings, driven by the `count` the API reports
//!
//! # Example
//!
//! ```rust,ignore
//! use medusa_seed_client::{AdminClient, MedusaConfig};
//!
//! let client = AdminClient::new(&MedusaConfig::from_env()?);
//!
//! let categories = client.list_categories().await?;
//! let channels = client.list_sales_channels(Some("Default Sales Channel")).await?;
//! ```

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use url::Url;

use crate::config::MedusaConfig;

mod categories;
mod products;
mod sales_channels;

pub use products::CreatedProduct;

/// Page size used for offset-paginated listings.
const PAGE_SIZE: usize = 100;

/// Errors that can occur when interacting with the Medusa Admin API.
#[derive(Debug, Error)]
pub enum AdminApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the request.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built from the configured base.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limited by the store.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// Medusa Admin REST API client.
///
/// Provides typed access to the handful of admin endpoints the seeder
/// needs: listings of products, categories, and sales channels, plus the
/// bulk product-create call. Cheap to clone.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

/// Error body returned by Medusa on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Store connection settings
    #[must_use]
    pub fn new(config: &MedusaConfig) -> Self {
        Self {
            inner: Arc::new(AdminClientInner {
                http: reqwest::Client::new(),
                base_url: config.admin_url.clone(),
                api_token: config.api_token.expose_secret().to_owned(),
            }),
        }
    }

    /// Get the configured store base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Execute a GET request against an admin endpoint.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AdminApiError> {
        let url = self.inner.base_url.join(path)?;

        let response = self
            .inner
            .http
            .get(url)
            .bearer_auth(&self.inner.api_token)
            .query(query)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Execute a POST request with a JSON body against an admin endpoint.
    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AdminApiError> {
        let url = self.inner.base_url.join(path)?;

        let response = self
            .inner
            .http
            .post(url)
            .bearer_auth(&self.inner.api_token)
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Map status codes to the error taxonomy and deserialize success bodies.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AdminApiError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(AdminApiError::RateLimited(retry_after));
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(AdminApiError::Unauthorized(
                "Invalid or expired admin token".to_owned(),
            ));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(text);
            return Err(AdminApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
