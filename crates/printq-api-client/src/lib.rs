//! HTTP client for the print upload endpoint.
//!
//! Provides a thin wrapper around `reqwest::Client` bound to the
//! configured backend base URL, with a multipart POST helper. The
//! domain methods (single-job upload and the sequential submission
//! pass) live in `api`.

pub mod api;

use anyhow::{Context, Result};
use printq_core::Config;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client bound to the upload endpoint's base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given base URL.
    ///
    /// No request timeout is configured: a stalled upload holds up the
    /// remainder of its submission pass, nothing else.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the environment: `PRINTQ_BACKEND_URL` or
    /// `BACKEND_URL`, defaulting to localhost.
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Self::new(config.backend_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a multipart form and parse the response body as JSON.
    ///
    /// An HTTP error status is not a failure by itself: like a browser
    /// fetch, the request only fails when it cannot be sent or the
    /// response body cannot be read as JSON.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.build_url(path);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to send request")?;

        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }
}

// Re-export domain types for convenience.
pub use api::{SubmitOutcome, UploadAck};
