//! # HTTP Client Utilities
//!
//! Shared HTTP client used by every vendor client.
//!
//! Provides:
//! - A fixed per-request timeout
//! - JSON decoding of success responses
//! - Mapping of transport failures and non-success statuses to
//!   [`VendorError`]
//!
//! Requests are issued exactly once; there is no retry layer.
//!
//! # Examples
//!
//! ```ignore
//! use flight_offers::infrastructure::vendors::http_client::HttpClient;
//!
//! let client = HttpClient::new(60_000)?;
//! let body: MyResponse = client.get_with_params(&url, &[("adults", "1")], HeaderMap::new()).await?;
//! ```

use crate::infrastructure::vendors::error::{VendorError, VendorResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default timeout for a single vendor call.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// HTTP client wrapper for vendor adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> VendorResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| VendorError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Joins a vendor base URL and a resource path.
    #[must_use]
    pub fn endpoint(base_url: &str, resource: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }

    /// Makes a GET request with query parameters and headers, decoding the
    /// JSON response.
    ///
    /// # Errors
    ///
    /// Returns `VendorError::Timeout` or `VendorError::Connection` on transport
    /// failure, `VendorError::Status` on a non-success status, and
    /// `VendorError::Decode` if the body is not the expected JSON.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
        headers: HeaderMap,
    ) -> VendorResult<T> {
        tracing::debug!(url, "vendor GET");
        let response = self
            .client
            .get(url)
            .query(params)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Makes a form-encoded POST request, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get_with_params`].
    pub async fn post_form<T: DeserializeOwned, F: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &F,
    ) -> VendorResult<T> {
        tracing::debug!(url, "vendor POST");
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Checks status and deserializes JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> VendorResult<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| VendorError::decode(format!("failed to parse response: {e}")))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(VendorError::status(status.as_u16(), body))
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> VendorError {
        if error.is_timeout() {
            VendorError::timeout(format!("request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            VendorError::connection(format!("connection failed: {error}"))
        } else {
            VendorError::connection(format!("HTTP request failed: {error}"))
        }
    }
}
