// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 token endpoints

use alloy_primitives::Address;

use crate::{
    fields::{Action, ApiModule, Field, Query},
    render_address,
};

/// Total supply of an ERC-20 token
pub fn get_total_supply_by_contract_address(contract_address: &Address) -> String {
    Query::new(ApiModule::Stats, Action::TokenSupply)
        .field(Field::ContractAddress, render_address(contract_address))
        .finish()
}

/// ERC-20 token balance of an account at the latest block
pub fn get_acc_balance_by_token_and_contract_address(
    contract_address: &Address,
    address: &Address,
) -> String {
    Query::new(ApiModule::Account, Action::TokenBalance)
        .field(Field::ContractAddress, render_address(contract_address))
        .field(Field::Address, render_address(address))
        .field(Field::Tag, "latest")
        .finish()
}
