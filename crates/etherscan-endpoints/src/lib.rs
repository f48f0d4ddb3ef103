// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint definitions for the Etherscan API
//!
//! Every supported API operation is a pure function that turns typed arguments
//! into the operation-specific query fragment (`module=...&action=...&...`).
//! Nothing in this crate performs I/O; the `etherscan` crate prepends the
//! request prefix, appends the chain id and API key, and sends the request.
//!
//! # Module Structure
//!
//! - [`accounts`], [`blocks`], [`contracts`], [`gas_tracker`], [`pro`],
//!   [`proxies`], [`stats`], [`tokens`], [`transactions`]: endpoint functions,
//!   grouped the way the endpoint configuration groups them ([`Module`])
//! - [`fields`]: field markers, upstream module/action names, [`fields::Query`]
//! - [`params`]: typed parameters (`Sort`, `BlockTag`, `Pagination`, ...)
//! - [`error`]: argument validation errors

use std::{fmt, str::FromStr};

use alloy_primitives::{Address, TxHash, hex};

pub mod accounts;
pub mod blocks;
pub mod contracts;
pub mod error;
pub mod fields;
pub mod gas_tracker;
pub mod params;
pub mod pro;
pub mod proxies;
pub mod stats;
pub mod tokens;
pub mod transactions;

pub use error::{EndpointError, EndpointResult};
pub use fields::{PREFIX, Query};
pub use params::{BlockRange, BlockTag, ClientType, Closest, DateRange, Pagination, Sort, SyncMode};

/// Logical grouping of endpoints, as named in the endpoint configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Module {
    Accounts,
    Blocks,
    Contracts,
    GasTracker,
    Pro,
    Proxies,
    Stats,
    Tokens,
    Transactions,
}

impl Module {
    /// Name used in the endpoint configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Blocks => "blocks",
            Self::Contracts => "contracts",
            Self::GasTracker => "gastracker",
            Self::Pro => "pro",
            Self::Proxies => "proxies",
            Self::Stats => "stats",
            Self::Tokens => "tokens",
            Self::Transactions => "transactions",
        }
    }

    /// Returns all modules
    pub const fn all() -> &'static [Self] {
        &[
            Self::Accounts,
            Self::Blocks,
            Self::Contracts,
            Self::GasTracker,
            Self::Pro,
            Self::Proxies,
            Self::Stats,
            Self::Tokens,
            Self::Transactions,
        ]
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|module| module.as_str() == s)
            .ok_or_else(|| format!("unknown endpoint module `{s}`"))
    }
}

/// EIP-55 checksummed form of an address
pub(crate) fn render_address(address: &Address) -> String {
    address.to_checksum(None)
}

/// `0x`-prefixed lowercase hex of a 32-byte hash
pub(crate) fn render_hash(hash: &TxHash) -> String {
    hex::encode_prefixed(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_names_round_trip() {
        for &module in Module::all() {
            assert_eq!(module.as_str().parse::<Module>().unwrap(), module);
            assert_eq!(module.to_string(), module.as_str());
        }
    }

    #[test]
    fn module_names_are_case_sensitive() {
        assert!("Accounts".parse::<Module>().is_err());
        assert!("account".parse::<Module>().is_err());
    }
}
