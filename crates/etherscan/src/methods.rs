// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed endpoint methods
//!
//! One method per registered endpoint. Each takes typed arguments plus
//! anything convertible into [`CallOptions`] (`()`, a [`ChainId`] or an
//! `Option<ChainId>`), and fails with
//! [`EtherscanError::EndpointUnavailable`](crate::EtherscanError::EndpointUnavailable)
//! when the endpoint is not bound on the facade.
//!
//! [`ChainId`]: etherscan_types::ChainId

use alloy_primitives::{Address, Bytes, TxHash, U256};
use etherscan_endpoints::{
    BlockRange, BlockTag, ClientType, Closest, DateRange, Pagination, Sort, SyncMode, accounts,
    blocks, contracts, gas_tracker, pro, proxies, stats, tokens, transactions,
};
use serde_json::Value;

use crate::{
    client::{CallOptions, Etherscan},
    error::EtherscanResult,
    transport::Transport,
};

macro_rules! typed_endpoints {
    ($(
        $(#[$doc:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) => $fragment:expr;
    )*) => {
        $(
            $(#[$doc])*
            pub async fn $name(
                &self,
                $($arg: $ty,)*
                options: impl Into<CallOptions>,
            ) -> EtherscanResult<Value> {
                self.invoke(stringify!($name), options.into(), |_| $fragment)
                    .await
            }
        )*
    };
}

impl<T: Transport> Etherscan<T> {
    typed_endpoints! {
        /// Ether balance of an address at the latest block
        fn get_eth_balance(address: &Address) => Ok(accounts::get_eth_balance(address));

        /// Ether balances of several addresses; the list must not be empty
        fn get_eth_balance_multiple(addresses: &[Address]) =>
            accounts::get_eth_balance_multiple(addresses);

        /// Normal transactions of an address
        fn get_normal_txs_by_address(address: &Address, blocks: BlockRange, sort: Sort) =>
            Ok(accounts::get_normal_txs_by_address(address, blocks, sort));

        /// One page of the normal transactions of an address
        fn get_normal_txs_by_address_paginated(
            address: &Address,
            page: Pagination,
            blocks: BlockRange,
            sort: Sort,
        ) => Ok(accounts::get_normal_txs_by_address_paginated(address, page, blocks, sort));

        /// Internal transactions of an address
        fn get_internal_txs_by_address(address: &Address, blocks: BlockRange, sort: Sort) =>
            Ok(accounts::get_internal_txs_by_address(address, blocks, sort));

        /// One page of the internal transactions of an address
        fn get_internal_txs_by_address_paginated(
            address: &Address,
            page: Pagination,
            blocks: BlockRange,
            sort: Sort,
        ) => Ok(accounts::get_internal_txs_by_address_paginated(address, page, blocks, sort));

        /// Internal transactions created by a transaction
        fn get_internal_txs_by_txhash(txhash: &TxHash) =>
            Ok(accounts::get_internal_txs_by_txhash(txhash));

        /// One page of the internal transactions within a block range
        fn get_internal_txs_by_block_range_paginated(
            blocks: BlockRange,
            page: Pagination,
            sort: Sort,
        ) => Ok(accounts::get_internal_txs_by_block_range_paginated(blocks, page, sort));

        /// ERC-20 transfer events involving an address
        fn get_erc20_token_transfer_events_by_address(
            address: &Address,
            blocks: BlockRange,
            sort: Sort,
        ) => Ok(accounts::get_erc20_token_transfer_events_by_address(address, blocks, sort));

        /// One page of the ERC-20 transfer events of a token contract
        fn get_erc20_token_transfer_events_by_contract_address_paginated(
            contract_address: &Address,
            page: Pagination,
            sort: Sort,
        ) => Ok(accounts::get_erc20_token_transfer_events_by_contract_address_paginated(
            contract_address,
            page,
            sort,
        ));

        /// One page of the ERC-20 transfer events of a token contract involving an address
        fn get_erc20_token_transfer_events_by_address_and_contract_paginated(
            contract_address: &Address,
            address: &Address,
            page: Pagination,
            sort: Sort,
        ) => Ok(accounts::get_erc20_token_transfer_events_by_address_and_contract_paginated(
            contract_address,
            address,
            page,
            sort,
        ));

        /// ERC-721 transfer events involving an address
        fn get_erc721_token_transfer_events_by_address(
            address: &Address,
            blocks: BlockRange,
            sort: Sort,
        ) => Ok(accounts::get_erc721_token_transfer_events_by_address(address, blocks, sort));

        /// One page of the ERC-721 transfer events of a token contract
        fn get_erc721_token_transfer_events_by_contract_address_paginated(
            contract_address: &Address,
            page: Pagination,
            sort: Sort,
        ) => Ok(accounts::get_erc721_token_transfer_events_by_contract_address_paginated(
            contract_address,
            page,
            sort,
        ));

        /// One page of the ERC-721 transfer events of a token contract involving an address
        fn get_erc721_token_transfer_events_by_address_and_contract_paginated(
            contract_address: &Address,
            address: &Address,
            page: Pagination,
            sort: Sort,
        ) => Ok(accounts::get_erc721_token_transfer_events_by_address_and_contract_paginated(
            contract_address,
            address,
            page,
            sort,
        ));

        /// Blocks validated by an address
        fn get_mined_blocks_by_address(address: &Address) =>
            Ok(accounts::get_mined_blocks_by_address(address));

        /// One page of the blocks validated by an address
        fn get_mined_blocks_by_address_paginated(address: &Address, page: Pagination) =>
            Ok(accounts::get_mined_blocks_by_address_paginated(address, page));

        /// Block and uncle rewards of a block
        fn get_block_reward_by_block_number(block_no: u64) =>
            Ok(blocks::get_block_reward_by_block_number(block_no));

        /// Estimated time until a future block is mined
        fn get_est_block_countdown_time_by_block_number(block_no: u64) =>
            Ok(blocks::get_est_block_countdown_time_by_block_number(block_no));

        /// Block mined closest to a unix timestamp
        fn get_block_number_by_timestamp(timestamp: u64, closest: Closest) =>
            Ok(blocks::get_block_number_by_timestamp(timestamp, closest));

        /// ABI of a verified contract
        fn get_contract_abi(address: &Address) => Ok(contracts::get_contract_abi(address));

        /// Source code of a verified contract
        fn get_contract_source_code(address: &Address) =>
            Ok(contracts::get_contract_source_code(address));

        /// Execution status of a contract transaction
        fn get_contract_execution_status(txhash: &TxHash) =>
            Ok(transactions::get_contract_execution_status(txhash));

        /// Receipt status of a transaction
        fn get_tx_receipt_status(txhash: &TxHash) =>
            Ok(transactions::get_tx_receipt_status(txhash));

        /// Estimated confirmation time for a gas price in wei
        fn get_est_confirmation_time(gas_price: u128) =>
            Ok(gas_tracker::get_est_confirmation_time(gas_price));

        /// Safe, proposed and fast gas prices
        fn get_gas_oracle() => Ok(gas_tracker::get_gas_oracle());

        /// Total ether supply
        fn get_total_eth_supply() => Ok(stats::get_total_eth_supply());

        /// Total ether supply including staking rewards and burnt fees
        fn get_total_eth2_supply() => Ok(stats::get_total_eth2_supply());

        /// Latest ether price
        fn get_eth_last_price() => Ok(stats::get_eth_last_price());

        /// Chain data size over a range of days
        fn get_eth_nodes_size(
            dates: DateRange,
            client_type: ClientType,
            sync_mode: SyncMode,
            sort: Sort,
        ) => Ok(stats::get_eth_nodes_size(dates, client_type, sync_mode, sort));

        /// Number of discoverable nodes
        fn get_total_nodes_count() => Ok(stats::get_total_nodes_count());

        /// Total supply of an ERC-20 token
        fn get_total_supply_by_contract_address(contract_address: &Address) =>
            Ok(tokens::get_total_supply_by_contract_address(contract_address));

        /// ERC-20 token balance of an account
        fn get_acc_balance_by_token_and_contract_address(
            contract_address: &Address,
            address: &Address,
        ) => Ok(tokens::get_acc_balance_by_token_and_contract_address(contract_address, address));

        /// `eth_blockNumber`
        fn get_proxy_block_number() => Ok(proxies::get_proxy_block_number());

        /// `eth_getBlockByNumber`, with full transaction objects
        fn get_proxy_block_by_number(tag: BlockTag) =>
            Ok(proxies::get_proxy_block_by_number(tag));

        /// `eth_getUncleByBlockNumberAndIndex`
        fn get_proxy_uncle_by_block_number_and_index(tag: BlockTag, index: u64) =>
            Ok(proxies::get_proxy_uncle_by_block_number_and_index(tag, index));

        /// `eth_getBlockTransactionCountByNumber`
        fn get_proxy_block_transaction_count_by_number(tag: BlockTag) =>
            Ok(proxies::get_proxy_block_transaction_count_by_number(tag));

        /// `eth_getTransactionByHash`
        fn get_proxy_transaction_by_hash(txhash: &TxHash) =>
            Ok(proxies::get_proxy_transaction_by_hash(txhash));

        /// `eth_getTransactionByBlockNumberAndIndex`
        fn get_proxy_transaction_by_block_number_and_index(tag: BlockTag, index: u64) =>
            Ok(proxies::get_proxy_transaction_by_block_number_and_index(tag, index));

        /// `eth_getTransactionCount` at the latest block
        fn get_proxy_transaction_count(address: &Address) =>
            Ok(proxies::get_proxy_transaction_count(address));

        /// `eth_getTransactionReceipt`
        fn get_proxy_transaction_receipt(txhash: &TxHash) =>
            Ok(proxies::get_proxy_transaction_receipt(txhash));

        /// `eth_call` at the latest block
        fn get_proxy_call(to: &Address, data: &Bytes) => Ok(proxies::get_proxy_call(to, data));

        /// `eth_getCode` at the latest block
        fn get_proxy_code_at(address: &Address) => Ok(proxies::get_proxy_code_at(address));

        /// `eth_getStorageAt` at the latest block
        fn get_proxy_storage_position_at(position: U256, address: &Address) =>
            Ok(proxies::get_proxy_storage_position_at(position, address));

        /// `eth_gasPrice`
        fn get_proxy_gas_price() => Ok(proxies::get_proxy_gas_price());

        /// `eth_estimateGas`
        fn get_proxy_est_gas(to: &Address, value: u128, gas_price: u128, gas: u64) =>
            Ok(proxies::get_proxy_est_gas(to, value, gas_price, gas));

        /// Ether balance of an address at a past block (API Pro)
        fn get_hist_eth_balance_for_address_by_block_no(address: &Address, block_no: u64) =>
            Ok(pro::get_hist_eth_balance_for_address_by_block_no(address, block_no));

        /// Daily average block size (API Pro)
        fn get_daily_average_block_size(dates: DateRange, sort: Sort) =>
            Ok(pro::get_daily_average_block_size(dates, sort));

        /// Daily block count and rewards (API Pro)
        fn get_daily_block_count_and_rewards(dates: DateRange, sort: Sort) =>
            Ok(pro::get_daily_block_count_and_rewards(dates, sort));

        /// Daily block rewards (API Pro)
        fn get_daily_block_rewards(dates: DateRange, sort: Sort) =>
            Ok(pro::get_daily_block_rewards(dates, sort));

        /// Daily average block time (API Pro)
        fn get_daily_average_block_time(dates: DateRange, sort: Sort) =>
            Ok(pro::get_daily_average_block_time(dates, sort));

        /// Daily uncle block count and rewards (API Pro)
        fn get_daily_uncle_block_count_and_rewards(dates: DateRange, sort: Sort) =>
            Ok(pro::get_daily_uncle_block_count_and_rewards(dates, sort));

        /// Project information of a token (API Pro)
        fn get_token_info_by_contract_address(contract_address: &Address) =>
            Ok(pro::get_token_info_by_contract_address(contract_address));
    }
}
