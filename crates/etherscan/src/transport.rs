// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport
//!
//! The facade talks to the network through the [`Transport`] trait: one GET
//! per call, returning the raw status and body. [`HttpTransport`] is the
//! reqwest-backed implementation; tests substitute their own.

use std::time::Duration;

use reqwest::{Client, header::USER_AGENT};

use crate::error::{EtherscanError, EtherscanResult};

/// Completed HTTP response, before parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl RawResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends GET requests on behalf of the facade
pub trait Transport: Send + Sync {
    /// Perform one GET request against a fully built URL
    ///
    /// Implementations must send an empty `User-Agent` header and must not
    /// retry.
    ///
    /// # Errors
    ///
    /// Returns [`EtherscanError::Http`] or [`EtherscanError::Timeout`] when no
    /// response was received. Non-success statuses are not errors at this
    /// level.
    fn get(&self, url: &str) -> impl Future<Output = EtherscanResult<RawResponse>> + Send;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Transport with the HTTP client defaults (no timeout)
    pub fn new() -> EtherscanResult<Self> {
        Self::build(None)
    }

    /// Transport whose requests fail after `timeout`
    pub fn with_timeout(timeout: Duration) -> EtherscanResult<Self> {
        Self::build(Some(timeout))
    }

    /// Wrap an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn build(timeout: Option<Duration>) -> EtherscanResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(EtherscanError::http)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> EtherscanResult<RawResponse> {
        let response = self.client.get(url).header(USER_AGENT, "").send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(RawResponse::new(200, "{}").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(301, "").is_success());
        assert!(!RawResponse::new(429, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn builds_with_and_without_timeout() {
        assert!(HttpTransport::new().is_ok());
        assert!(HttpTransport::with_timeout(Duration::from_secs(5)).is_ok());
    }
}
