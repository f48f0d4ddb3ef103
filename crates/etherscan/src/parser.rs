// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Response parsing
//!
//! [`parse_response`] is what every facade call runs: it checks the HTTP
//! status and decodes the body, without looking at the upstream envelope.
//! [`ApiResponse`] is an opt-in layer on top for callers that want the
//! envelope's `result` payload and its failure signalling.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{EtherscanError, EtherscanResult},
    transport::RawResponse,
};

/// Turn a completed response into decoded JSON
///
/// Non-success statuses become [`EtherscanError::Status`] with the body
/// attached; bodies that are not JSON become [`EtherscanError::Parse`].
pub fn parse_response(response: RawResponse) -> EtherscanResult<Value> {
    if !response.is_success() {
        return Err(EtherscanError::Status {
            status: response.status,
            body: response.body,
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// Upstream response envelope
///
/// The REST modules answer `{"status", "message", "result"}` with `status`
/// set to `"1"` on success. The proxy module answers JSON-RPC
/// `{"jsonrpc", "id", "result"}` or `{"jsonrpc", "id", "error"}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    /// REST envelope
    Rest {
        /// `"1"` on success, `"0"` on failure
        status: String,
        /// `"OK"`, `"NOTOK"` or a description of the failure
        message: String,
        /// Payload, or an error description when `status` is `"0"`
        result: Value,
    },
    /// JSON-RPC envelope
    JsonRpc {
        /// Protocol version, normally `"2.0"`
        jsonrpc: String,
        /// Request id echoed back
        #[serde(default)]
        id: Value,
        /// Payload
        #[serde(default)]
        result: Option<Value>,
        /// Error object
        #[serde(default)]
        error: Option<RpcError>,
    },
}

/// JSON-RPC error object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcError {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
}

impl ApiResponse {
    /// Interpret a decoded response body
    pub fn from_value(value: Value) -> EtherscanResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether the envelope reports success
    pub fn is_ok(&self) -> bool {
        match self {
            Self::Rest { status, .. } => status == "1",
            Self::JsonRpc { error, .. } => error.is_none(),
        }
    }

    /// The payload, or [`EtherscanError::Api`] when the envelope reports failure
    ///
    /// A REST envelope with status `"0"` and an empty list result means "no
    /// records found" and is returned as that empty list.
    pub fn into_result(self) -> EtherscanResult<Value> {
        match self {
            Self::Rest {
                status,
                message,
                result,
            } => {
                let empty_list = result.as_array().is_some_and(Vec::is_empty);
                if status == "1" || empty_list {
                    Ok(result)
                } else {
                    Err(EtherscanError::Api {
                        message,
                        result: describe(&result),
                    })
                }
            }
            Self::JsonRpc {
                error: Some(error), ..
            } => Err(EtherscanError::Api {
                message: error.message,
                result: format!("code {}", error.code),
            }),
            Self::JsonRpc { result, .. } => Ok(result.unwrap_or(Value::Null)),
        }
    }
}

fn describe(result: &Value) -> String {
    match result {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
