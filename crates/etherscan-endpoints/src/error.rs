// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Argument validation errors
//!
//! Every failure in this crate is local: it is raised while turning caller
//! arguments into a query fragment, before any request exists.

use thiserror::Error;

/// Result type alias for endpoint definition operations
pub type EndpointResult<T> = Result<T, EndpointError>;

/// Errors raised when endpoint arguments are rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum EndpointError {
    /// A required argument was not supplied
    #[error("missing required argument `{name}`")]
    MissingArgument { name: String },

    /// An argument was supplied but could not be interpreted
    #[error("invalid value for `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    /// A list argument was supplied without any element
    #[error("argument `{name}` must contain at least one element")]
    EmptyList { name: String },

    /// A named argument does not belong to the endpoint
    #[error("unexpected argument `{name}`")]
    UnexpectedArgument { name: String },

    /// More positional arguments were given than the endpoint declares
    #[error("expected at most {expected} positional arguments, got {given}")]
    TooManyArguments { expected: usize, given: usize },
}

impl EndpointError {
    /// Create a missing argument error
    pub fn missing<T: ToString>(name: T) -> Self {
        Self::MissingArgument {
            name: name.to_string(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid<N: ToString, R: ToString>(name: N, reason: R) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an empty list error
    pub fn empty_list<T: ToString>(name: T) -> Self {
        Self::EmptyList {
            name: name.to_string(),
        }
    }

    /// Name of the offending argument, when the error is tied to one
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::MissingArgument { name }
            | Self::InvalidArgument { name, .. }
            | Self::EmptyList { name }
            | Self::UnexpectedArgument { name } => Some(name),
            Self::TooManyArguments { .. } => None,
        }
    }
}
