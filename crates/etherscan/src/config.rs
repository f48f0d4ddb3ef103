// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint configuration
//!
//! The configuration is a JSON object whose keys are endpoint names and whose
//! values name the module each endpoint belongs to:
//!
//! ```json
//! {
//!     "get_eth_balance": { "module": "accounts" },
//!     "_get_daily_block_rewards": { "module": "pro" }
//! }
//! ```
//!
//! A key starting with `_` is kept in the configuration but never bound.
//! Repeating a key is rejected as malformed.
//! Entry order is preserved and becomes the order of
//! [`Etherscan::endpoint_names`](crate::Etherscan::endpoint_names).

use std::{collections::HashSet, fmt, path::Path};

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};
use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;

/// Prefix marking a configuration entry as disabled
pub const DISABLED_PREFIX: char = '_';

const BUNDLED: &str = include_str!("../resources/endpoints.json");

#[derive(Debug, Deserialize)]
struct RawEntry {
    module: String,
}

/// Top-level object, kept in document order with repeated keys rejected
struct RawEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping endpoint names to entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut seen = HashSet::new();
                let mut entries = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, Value>()? {
                    if !seen.insert(name.clone()) {
                        return Err(de::Error::custom(format!(
                            "endpoint `{name}` is configured more than once"
                        )));
                    }
                    entries.push((name, value));
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// One configuration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredEndpoint {
    name: String,
    module: String,
}

impl ConfiguredEndpoint {
    /// Name as written in the configuration, including any disabling prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module name as written in the configuration
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Whether the entry is bound at construction
    pub fn is_enabled(&self) -> bool {
        !self.name.starts_with(DISABLED_PREFIX)
    }
}

/// Ordered set of configured endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    entries: Vec<ConfiguredEndpoint>,
}

impl EndpointConfig {
    /// The configuration compiled into the crate
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json_str(BUNDLED)
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let RawEntries(object) = serde_json::from_str(json).map_err(ConfigError::malformed)?;

        let entries = object
            .into_iter()
            .map(|(name, value)| {
                let raw = RawEntry::deserialize(value).map_err(|e| {
                    ConfigError::malformed(format!("entry `{name}`: {e}"))
                })?;
                Ok(ConfiguredEndpoint {
                    name,
                    module: raw.module,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { entries })
    }

    /// Read and parse a configuration file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let config = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            entries = config.entries.len(),
            "loaded endpoint configuration"
        );
        Ok(config)
    }

    /// All entries, in configuration order
    pub fn entries(&self) -> &[ConfiguredEndpoint] {
        &self.entries
    }

    /// Entries that will be bound
    pub fn enabled(&self) -> impl Iterator<Item = &ConfiguredEndpoint> {
        self.entries.iter().filter(|entry| entry.is_enabled())
    }

    /// Entries carrying the disabling prefix
    pub fn disabled(&self) -> impl Iterator<Item = &ConfiguredEndpoint> {
        self.entries.iter().filter(|entry| !entry.is_enabled())
    }

    /// Number of entries, enabled or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_order_and_flags_disabled_entries() {
        let config = EndpointConfig::from_json_str(
            r#"{
                "get_gas_oracle": {"module": "gastracker"},
                "_get_daily_block_rewards": {"module": "pro"},
                "get_eth_balance": {"module": "accounts"}
            }"#,
        )
        .unwrap();

        let names: Vec<_> = config.entries().iter().map(ConfiguredEndpoint::name).collect();
        assert_eq!(
            names,
            ["get_gas_oracle", "_get_daily_block_rewards", "get_eth_balance"]
        );

        let enabled: Vec<_> = config.enabled().map(ConfiguredEndpoint::name).collect();
        assert_eq!(enabled, ["get_gas_oracle", "get_eth_balance"]);
        assert_eq!(config.disabled().count(), 1);
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn extra_entry_fields_are_ignored() {
        let config = EndpointConfig::from_json_str(
            r#"{"get_gas_oracle": {"module": "gastracker", "note": "free tier"}}"#,
        )
        .unwrap();
        assert_eq!(config.entries()[0].module(), "gastracker");
    }

    #[test]
    fn rejects_malformed_documents() {
        for json in [
            "[]",
            "not json",
            r#"{"get_gas_oracle": "gastracker"}"#,
            r#"{"get_gas_oracle": {}}"#,
            r#"{"get_gas_oracle": {"module": 7}}"#,
        ] {
            assert!(
                matches!(
                    EndpointConfig::from_json_str(json),
                    Err(ConfigError::Malformed { .. })
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn repeated_keys_are_rejected() {
        let json = r#"{
            "get_gas_oracle": {"module": "gastracker"},
            "get_eth_last_price": {"module": "stats"},
            "get_gas_oracle": {"module": "stats"}
        }"#;
        match EndpointConfig::from_json_str(json) {
            Err(ConfigError::Malformed { message }) => {
                assert!(message.contains("get_gas_oracle"), "{message}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_valid() {
        let config = EndpointConfig::from_json_str("{}").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn bundled_configuration_disables_only_pro_endpoints() {
        let config = EndpointConfig::bundled().unwrap();
        assert!(!config.is_empty());
        for entry in config.entries() {
            assert_eq!(entry.is_enabled(), entry.module() != "pro", "{}", entry.name());
        }
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let error = EndpointConfig::from_file("/nonexistent/endpoints.json")
            .await
            .unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }
}
