// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Network statistics endpoints

use crate::{
    fields::{Action, ApiModule, Field, Query},
    params::{ClientType, DateRange, Sort, SyncMode},
};

/// Total supply of ether, in wei
pub fn get_total_eth_supply() -> String {
    Query::new(ApiModule::Stats, Action::EthSupply).finish()
}

/// Total supply of ether including staking rewards and burnt fees
pub fn get_total_eth2_supply() -> String {
    Query::new(ApiModule::Stats, Action::EthSupply2).finish()
}

/// Latest ether price in BTC and USD
pub fn get_eth_last_price() -> String {
    Query::new(ApiModule::Stats, Action::EthPrice).finish()
}

/// Size of the chain data directory over a range of days
pub fn get_eth_nodes_size(
    dates: DateRange,
    client_type: ClientType,
    sync_mode: SyncMode,
    sort: Sort,
) -> String {
    Query::new(ApiModule::Stats, Action::ChainSize)
        .field(Field::StartDate, dates.start())
        .field(Field::EndDate, dates.end())
        .field(Field::ClientType, client_type)
        .field(Field::SyncMode, sync_mode)
        .field(Field::Sort, sort)
        .finish()
}

/// Number of discoverable nodes
pub fn get_total_nodes_count() -> String {
    Query::new(ApiModule::Stats, Action::NodeCount).finish()
}
