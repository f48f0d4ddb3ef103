// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Etherscan client
//!
//! This crate provides value types that are shared by the endpoint definitions,
//! the client facade and the command-line tool, avoiding circular dependencies.

pub mod chains;

pub use chains::{ChainId, ChainIdParseError};
