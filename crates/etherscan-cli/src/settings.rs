// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Layered CLI settings
//!
//! Sources, lowest precedence first: built-in defaults, a settings file
//! (`etherscan.{json,toml,yaml}` in the working directory when present, or the
//! file given with `--config`), then `ETHERSCAN_*` environment variables.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, ensure};
use config::{Config, ConfigError, Environment, File};
use etherscan::{ChainId, EndpointConfig, Etherscan, PREFIX};
use serde::Deserialize;
use tracing::debug;

const DEFAULT_SETTINGS_FILE: &str = "etherscan";
const ENV_PREFIX: &str = "ETHERSCAN";

/// Resolved settings
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// Etherscan API key
    pub api_key: Option<String>,
    /// Chain used when a call does not name one
    pub default_chain: ChainId,
    /// Endpoint configuration file replacing the bundled one
    pub endpoints_config: Option<PathBuf>,
    /// Request prefix
    pub base_url: String,
    /// HTTP timeout, in seconds
    pub timeout_seconds: Option<u64>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("default_chain", &self.default_chain)
            .field("endpoints_config", &self.endpoints_config)
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(file, None)
    }

    /// Load settings, reading environment variables from `env` instead of the
    /// process environment when given
    pub fn load_with_env(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings: Self = Config::builder()
            .set_default("default_chain", ChainId::default().id())?
            .set_default("base_url", PREFIX)?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        debug!(?settings, "loaded settings");
        Ok(settings)
    }

    /// Build a facade from these settings
    pub async fn client(&self) -> Result<Etherscan> {
        let api_key = self
            .api_key
            .clone()
            .context("no API key: set ETHERSCAN_API_KEY, `api_key` in the settings file, or --api-key")?;

        let mut builder = Etherscan::builder(api_key)
            .default_chain(self.default_chain)
            .base_url(&self.base_url);

        if let Some(seconds) = self.timeout_seconds {
            ensure!(seconds > 0, "timeout_seconds must be greater than 0");
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(path) = &self.endpoints_config {
            builder = builder.config(EndpointConfig::from_file(path).await?);
        }

        Ok(builder.build()?)
    }

    /// The endpoint configuration these settings select
    pub async fn endpoint_config(&self) -> Result<EndpointConfig> {
        Ok(match &self.endpoints_config {
            Some(path) => EndpointConfig::from_file(path).await?,
            None => EndpointConfig::bundled()?,
        })
    }
}
