// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! API Pro endpoints
//!
//! These require a paid Etherscan plan; the bundled endpoint configuration
//! lists them disabled.

use alloy_primitives::Address;

use crate::{
    fields::{Action, ApiModule, Field, Query},
    params::{DateRange, Sort},
    render_address,
};

/// Historical ether balance of an address at a block
pub fn get_hist_eth_balance_for_address_by_block_no(address: &Address, block_no: u64) -> String {
    Query::new(ApiModule::Account, Action::BalanceHistory)
        .field(Field::Address, render_address(address))
        .field(Field::BlockNo, block_no)
        .finish()
}

/// Daily average block size
pub fn get_daily_average_block_size(dates: DateRange, sort: Sort) -> String {
    daily(Action::DailyAvgBlockSize, dates, sort)
}

/// Daily block count and block rewards
pub fn get_daily_block_count_and_rewards(dates: DateRange, sort: Sort) -> String {
    daily(Action::DailyBlkCount, dates, sort)
}

/// Daily block rewards distributed to validators
pub fn get_daily_block_rewards(dates: DateRange, sort: Sort) -> String {
    daily(Action::DailyBlockRewards, dates, sort)
}

/// Daily average time for a block to be included
pub fn get_daily_average_block_time(dates: DateRange, sort: Sort) -> String {
    daily(Action::DailyAvgBlockTime, dates, sort)
}

/// Daily uncle block count and rewards
pub fn get_daily_uncle_block_count_and_rewards(dates: DateRange, sort: Sort) -> String {
    daily(Action::DailyUncleBlkCount, dates, sort)
}

/// Project information and social links of a token contract
pub fn get_token_info_by_contract_address(contract_address: &Address) -> String {
    Query::new(ApiModule::Token, Action::TokenInfo)
        .field(Field::ContractAddress, render_address(contract_address))
        .finish()
}

fn daily(action: Action, dates: DateRange, sort: Sort) -> String {
    Query::new(ApiModule::Stats, action)
        .field(Field::StartDate, dates.start())
        .field(Field::EndDate, dates.end())
        .field(Field::Sort, sort)
        .finish()
}
