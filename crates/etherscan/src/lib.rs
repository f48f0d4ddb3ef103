// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Config-driven client for the Etherscan v2 multichain API
//!
//! The [`Etherscan`] facade binds the endpoints named in a JSON configuration
//! and exposes each one twice: as a typed async method
//! (`client.get_eth_balance(&address, ())`) and through the dynamic
//! [`Etherscan::call`] entry point. Every call builds
//! `<prefix><fragment>&chainid=<id>&apikey=<key>`, sends one GET with an empty
//! `User-Agent` header and decodes the JSON body.
//!
//! # Architecture
//!
//! - **Facade**: [`client`] - construction, per-call options, dispatch
//! - **Typed methods**: [`methods`] - one method per registered endpoint
//! - **Configuration**: [`config`] - bundled or file-based endpoint configuration
//! - **Registry**: [`registry`] - explicit name to endpoint table, untyped arguments
//! - **Transport**: [`transport`] - the [`Transport`] seam and its reqwest implementation
//! - **Parsing**: [`parser`] - status and JSON checks, optional envelope handling
//!
//! Nothing is cached or retried: two identical calls send two requests.

pub mod api_key;
pub mod client;
pub mod config;
pub mod error;
pub mod methods;
pub mod parser;
pub mod registry;
pub mod transport;

pub use api_key::ApiKey;
pub use client::{CallOptions, Etherscan, EtherscanBuilder};
pub use config::{ConfiguredEndpoint, DISABLED_PREFIX, EndpointConfig};
pub use error::{ConfigError, EtherscanError, EtherscanResult};
pub use etherscan_endpoints::{
    BlockRange, BlockTag, ClientType, Closest, DateRange, EndpointError, Module, PREFIX,
    Pagination, Sort, SyncMode,
};
pub use etherscan_types::ChainId;
pub use parser::{ApiResponse, RpcError, parse_response};
pub use registry::{EndpointArgs, EndpointSpec, lookup, registry};
pub use transport::{HttpTransport, RawResponse, Transport};
