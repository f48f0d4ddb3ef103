// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan command-line client
//!
//! A thin shell over the [`etherscan`] facade: settings come from
//! [`settings::Settings`], arguments from [`cli::Cli`], and every command
//! renders its output as a string for `main` to print.

pub mod cli;
pub mod settings;

use anyhow::{Context, Result};
use etherscan::{ApiResponse, ChainId, EndpointConfig, lookup};
use tracing::info;

use crate::{
    cli::{Cli, Command, parse_args},
    settings::Settings,
};

const API_KEY_MARKER: &str = "&apikey=";

/// Load settings for `cli`, applying its flag overrides
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(api_key) = &cli.api_key {
        settings.api_key = Some(api_key.clone());
    }
    if let Some(path) = &cli.endpoints {
        settings.endpoints_config = Some(path.clone());
    }
    Ok(settings)
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> Result<String> {
    let settings = load_settings(&cli)?;
    execute(cli.command, &settings).await
}

/// Run one command against resolved settings
pub async fn execute(command: Command, settings: &Settings) -> Result<String> {
    match command {
        Command::Call {
            endpoint,
            args,
            chain,
            dry_run,
            result,
        } => {
            let client = settings.client().await?;
            let args = parse_args(&args);

            if dry_run {
                let url = client.request_url(&endpoint, &args, chain)?;
                return Ok(redact(&url));
            }

            info!(endpoint = %endpoint, ?chain, "calling endpoint");
            let value = client.call(&endpoint, &args, chain).await?;
            let value = if result {
                ApiResponse::from_value(value)?.into_result()?
            } else {
                value
            };
            Ok(serde_json::to_string_pretty(&value)?)
        }
        Command::Endpoints { all } => {
            let config = settings.endpoint_config().await?;
            Ok(render_endpoints(&config, all))
        }
        Command::Chains => Ok(render_chains()),
    }
}

fn redact(url: &str) -> String {
    match url.rsplit_once(API_KEY_MARKER) {
        Some((unsigned, _)) => format!("{unsigned}{API_KEY_MARKER}<redacted>"),
        None => url.to_string(),
    }
}

fn render_endpoints(config: &EndpointConfig, all: bool) -> String {
    let width = config
        .entries()
        .iter()
        .map(|entry| entry.name().len())
        .max()
        .unwrap_or_default();

    config
        .entries()
        .iter()
        .filter(|entry| all || entry.is_enabled())
        .map(|entry| {
            let params = lookup(entry.name().trim_start_matches(etherscan::DISABLED_PREFIX))
                .map(|spec| spec.params.join(", "))
                .unwrap_or_default();
            let status = if entry.is_enabled() { "" } else { "  (disabled)" };
            format!(
                "{:<width$}  {:<13}  ({params}){status}",
                entry.name(),
                entry.module(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_chains() -> String {
    ChainId::known()
        .map(|chain| format!("{:>10}  {}", chain.id(), chain.name().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("\n")
}
