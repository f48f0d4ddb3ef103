// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Geth/Parity JSON-RPC proxy endpoints
//!
//! Quantities on these endpoints follow JSON-RPC conventions: `0x`-prefixed
//! hex rather than decimal.

use alloy_primitives::{Address, Bytes, TxHash, U256, hex};

use crate::{
    fields::{Action, ApiModule, Field, Query},
    params::BlockTag,
    render_address, render_hash,
};

/// Number of the most recent block
pub fn get_proxy_block_number() -> String {
    Query::new(ApiModule::Proxy, Action::EthBlockNumber).finish()
}

/// Block with full transaction objects
pub fn get_proxy_block_by_number(tag: BlockTag) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetBlockByNumber)
        .field(Field::Tag, tag)
        .field(Field::Boolean, "true")
        .finish()
}

/// Uncle of a block, by position
pub fn get_proxy_uncle_by_block_number_and_index(tag: BlockTag, index: u64) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetUncleByBlockNumberAndIndex)
        .field(Field::Tag, tag)
        .field(Field::Index, format!("{index:#x}"))
        .finish()
}

/// Number of transactions in a block
pub fn get_proxy_block_transaction_count_by_number(tag: BlockTag) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetBlockTransactionCountByNumber)
        .field(Field::Tag, tag)
        .finish()
}

/// Transaction by hash
pub fn get_proxy_transaction_by_hash(txhash: &TxHash) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetTransactionByHash)
        .field(Field::TxHash, render_hash(txhash))
        .finish()
}

/// Transaction by block and position
pub fn get_proxy_transaction_by_block_number_and_index(tag: BlockTag, index: u64) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetTransactionByBlockNumberAndIndex)
        .field(Field::Tag, tag)
        .field(Field::Index, format!("{index:#x}"))
        .finish()
}

/// Number of transactions sent from an address
pub fn get_proxy_transaction_count(address: &Address) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetTransactionCount)
        .field(Field::Address, render_address(address))
        .field(Field::Tag, BlockTag::Latest)
        .finish()
}

/// Receipt of a transaction
pub fn get_proxy_transaction_receipt(txhash: &TxHash) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetTransactionReceipt)
        .field(Field::TxHash, render_hash(txhash))
        .finish()
}

/// Execute a message call without creating a transaction
pub fn get_proxy_call(to: &Address, data: &Bytes) -> String {
    Query::new(ApiModule::Proxy, Action::EthCall)
        .field(Field::To, render_address(to))
        .field(Field::Data, hex::encode_prefixed(data))
        .field(Field::Tag, BlockTag::Latest)
        .finish()
}

/// Code deployed at an address
pub fn get_proxy_code_at(address: &Address) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetCode)
        .field(Field::Address, render_address(address))
        .field(Field::Tag, BlockTag::Latest)
        .finish()
}

/// Value of a storage slot of an address
pub fn get_proxy_storage_position_at(position: U256, address: &Address) -> String {
    Query::new(ApiModule::Proxy, Action::EthGetStorageAt)
        .field(Field::Address, render_address(address))
        .field(Field::Position, format!("0x{position:x}"))
        .field(Field::Tag, BlockTag::Latest)
        .finish()
}

/// Current gas price, in wei
pub fn get_proxy_gas_price() -> String {
    Query::new(ApiModule::Proxy, Action::EthGasPrice).finish()
}

/// Gas needed to execute a transaction; values are in wei
pub fn get_proxy_est_gas(to: &Address, value: u128, gas_price: u128, gas: u64) -> String {
    Query::new(ApiModule::Proxy, Action::EthEstimateGas)
        .field(Field::To, render_address(to))
        .field(Field::Value, format!("{value:#x}"))
        .field(Field::GasPrice, format!("{gas_price:#x}"))
        .field(Field::Gas, format!("{gas:#x}"))
        .finish()
}
