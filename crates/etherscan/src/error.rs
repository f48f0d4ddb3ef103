// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Etherscan facade
//!
//! Failures fall into the phases of a facade's life: construction
//! ([`ConfigError`], [`EtherscanError::InvalidApiKey`]), argument handling
//! ([`EtherscanError::Endpoint`], [`EtherscanError::EndpointUnavailable`]),
//! transport ([`EtherscanError::Http`], [`EtherscanError::Timeout`],
//! [`EtherscanError::Status`]) and decoding ([`EtherscanError::Parse`]).
//! None of them is retried.

use etherscan_endpoints::EndpointError;
use thiserror::Error;

/// Result type alias for facade operations
pub type EtherscanResult<T> = Result<T, EtherscanError>;

/// Errors raised while loading or resolving the endpoint configuration
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read endpoint configuration {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not a JSON object of endpoint entries
    #[error("malformed endpoint configuration: {message}")]
    Malformed { message: String },

    /// An enabled entry names an endpoint that is not registered
    #[error("endpoint `{endpoint}` (module `{module}`) does not exist")]
    UnknownEndpoint { endpoint: String, module: String },

    /// An enabled entry names a module that does not exist
    #[error("endpoint `{endpoint}` refers to unknown module `{module}`")]
    UnknownModule { endpoint: String, module: String },

    /// An enabled entry places an endpoint in the wrong module
    #[error("endpoint `{endpoint}` belongs to module `{expected}`, not `{configured}`")]
    ModuleMismatch {
        endpoint: String,
        configured: String,
        expected: String,
    },

    /// Request prefix is not a usable HTTP(S) URL
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ConfigError {
    /// Create a malformed configuration error
    pub fn malformed<T: ToString>(message: T) -> Self {
        Self::Malformed {
            message: message.to_string(),
        }
    }
}

/// Errors surfaced by the Etherscan facade
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum EtherscanError {
    /// Facade construction failed on its endpoint configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// API key is empty or whitespace-only
    #[error("API key cannot be empty")]
    InvalidApiKey,

    /// Endpoint is disabled or unknown on this facade
    #[error("endpoint `{name}` is not available")]
    EndpointUnavailable { name: String },

    /// Caller arguments were rejected before any request was made
    #[error("invalid arguments: {0}")]
    Endpoint(#[from] EndpointError),

    /// HTTP request failed
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// HTTP request did not complete in time
    #[error("request timed out")]
    Timeout,

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body is not valid JSON
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Upstream API reported a failure in its response envelope
    #[error("Etherscan API error: {message} ({result})")]
    Api { message: String, result: String },
}

impl EtherscanError {
    /// Create an HTTP error
    pub fn http<T: ToString>(message: T) -> Self {
        Self::Http {
            message: message.to_string(),
        }
    }

    /// Whether the error was raised locally, before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::InvalidApiKey
                | Self::EndpointUnavailable { .. }
                | Self::Endpoint(_)
        )
    }
}

impl From<reqwest::Error> for EtherscanError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            // Strip the URL: it carries the API key
            Self::http(error.without_url())
        }
    }
}
