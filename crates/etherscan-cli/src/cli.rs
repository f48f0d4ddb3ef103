// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use etherscan::{ChainId, EndpointArgs};

/// Query the Etherscan v2 API
#[derive(Debug, Parser)]
#[command(name = "etherscan", version, about)]
pub struct Cli {
    /// Settings file (json, toml or yaml); defaults to `etherscan.*` in the working directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Endpoint configuration file replacing the bundled one
    #[arg(long, global = true, value_name = "FILE")]
    pub endpoints: Option<PathBuf>,

    /// API key, overriding ETHERSCAN_API_KEY and the settings file
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Call an endpoint by name and print the JSON response
    Call {
        /// Endpoint name, as listed by `etherscan endpoints`
        endpoint: String,

        /// Arguments in declared order; `name=value` passes one by name
        args: Vec<String>,

        /// Chain id or name for this call only
        #[arg(long)]
        chain: Option<ChainId>,

        /// Print the request URL, with the key redacted, instead of sending it
        #[arg(long)]
        dry_run: bool,

        /// Print only the envelope's result and fail when it reports an error
        #[arg(long)]
        result: bool,
    },

    /// List configured endpoints and their parameters
    Endpoints {
        /// Include entries disabled in the configuration
        #[arg(long)]
        all: bool,
    },

    /// List known chains
    Chains,
}

/// Split raw call arguments into positional and named ones
///
/// `name=value` is taken as named when `name` looks like a parameter
/// identifier; anything else, including hex data containing `=`, stays
/// positional.
pub fn parse_args(raw: &[String]) -> EndpointArgs {
    raw.iter().fold(EndpointArgs::new(), |args, item| {
        match item.split_once('=') {
            Some((name, value)) if is_identifier(name) => args.with(name, value),
            _ => args.arg(item.as_str()),
        }
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
