//! # HTTP Client
//!
//! Thin reqwest wrapper used to call the quote source.
//!
//! The client applies a request timeout, classifies transport failures and
//! non-success statuses into [`SourceError`], and hands back the raw JSON
//! body so the caller can decide how to interpret it.
//!
//! # Examples
//!
//! ```ignore
//! use quote_relay::infrastructure::quote_source::http_client::HttpClient;
//!
//! let client = HttpClient::new(5000)?;
//! let body = client.get_json("https://api.example.com/currentprice.json").await?;
//! ```

use crate::infrastructure::quote_source::error::{SourceError, SourceResult};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper for the quote source.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Client` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| SourceError::client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Timeout` or `SourceError::Connection` if the
    /// request fails, `SourceError::BadStatus` for a non-2xx response and
    /// `SourceError::MalformedBody` if the body is not JSON.
    pub async fn get_json(&self, url: &str) -> SourceResult<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Checks status and parses the JSON body.
    async fn handle_response(&self, response: Response) -> SourceResult<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::bad_status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        serde_json::from_str(&text)
            .map_err(|e| SourceError::malformed_body(format!("Failed to parse response: {}", e)))
    }

    /// Maps a reqwest error to a SourceError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> SourceError {
        if error.is_timeout() {
            SourceError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            SourceError::connection(format!("Connection failed: {}", error))
        } else {
            SourceError::connection(format!("HTTP request failed: {}", error))
        }
    }
}
