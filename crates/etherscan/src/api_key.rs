// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Validated Etherscan API key
//!
//! [`ApiKey`] guarantees the key holds at least one non-whitespace character.
//! Its `Debug` and `Display` output are redacted so the key can sit inside
//! structs that get logged; [`ApiKey::expose`] is the only way to read it.
//!
//! ```rust
//! use etherscan::ApiKey;
//!
//! let key = ApiKey::new("YourApiKeyToken").unwrap();
//! assert_eq!(key.expose(), "YourApiKeyToken");
//! assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
//!
//! assert!(ApiKey::new("").is_err());
//! assert!(ApiKey::new(" \t\n").is_err());
//! ```

use core::fmt;
use std::str::FromStr;

use crate::error::EtherscanError;

const REDACTED: &str = "<redacted>";

/// A non-empty API key
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Box<str>);

impl ApiKey {
    /// Validate and wrap a key
    ///
    /// Empty and whitespace-only keys are rejected. Surrounding whitespace is
    /// trimmed, since it would otherwise end up in the query string.
    pub fn new(key: impl Into<String>) -> Result<Self, EtherscanError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(EtherscanError::InvalidApiKey);
        }
        Ok(Self(trimmed.into()))
    }

    /// The key as sent on the wire
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&format_args!("{REDACTED}")).finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl FromStr for ApiKey {
    type Err = EtherscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims() {
        let key = ApiKey::new("  ABC123  ").unwrap();
        assert_eq!(key.expose(), "ABC123");
        assert_eq!("XYZ".parse::<ApiKey>().unwrap().expose(), "XYZ");
    }

    #[test]
    fn rejects_blank_keys() {
        assert!(matches!(ApiKey::new(""), Err(EtherscanError::InvalidApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(EtherscanError::InvalidApiKey)));
    }

    #[test]
    fn formatting_never_reveals_the_key() {
        let key = ApiKey::new("SECRET").unwrap();
        assert!(!format!("{key:?}").contains("SECRET"));
        assert!(!key.to_string().contains("SECRET"));
        assert_eq!(key.to_string(), "<redacted>");
    }
}
