//! # Transport
//!
//! One request shape is used for both actions: an HTTP POST of a JSON body to
//! the configured endpoint, answered by a JSON body.
//!
//! The response body is returned whatever the HTTP status code. The ticket
//! endpoint reports rejected requests as `400` with a JSON error envelope, and
//! those are outcomes to render rather than failures. Only transport-level
//! problems (connect, TLS, reading the body) surface as errors.

use std::future::Future;

use anyhow::Result;
use log::debug;
use reqwest::header::CONTENT_TYPE;

/// Sends a request body to the endpoint and returns the response body.
pub trait Transport: Send + Sync {
    fn post_json(
        &self,
        endpoint: &str,
        body: String,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// [`Transport`] over HTTP(S) using a shared `reqwest::Client`.
///
/// No timeout is configured: a request that never completes never resolves.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-configured client (proxies, custom roots, ...).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<String> {
        let response = self
            .http
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!("{} answered {} ({} bytes)", endpoint, status, text.len());

        Ok(text)
    }
}
