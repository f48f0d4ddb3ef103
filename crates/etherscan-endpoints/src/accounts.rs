// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Account endpoints: balances, transaction lists, token transfers and mined blocks

use alloy_primitives::{Address, TxHash};

use crate::{
    error::{EndpointError, EndpointResult},
    fields::{Action, ApiModule, Field, Query},
    params::{BlockRange, Pagination, Sort},
    render_address, render_hash,
};

/// Ether balance of a single address at the latest block
pub fn get_eth_balance(address: &Address) -> String {
    Query::new(ApiModule::Account, Action::Balance)
        .field(Field::Address, render_address(address))
        .field(Field::Tag, "latest")
        .finish()
}

/// Ether balances of several addresses at the latest block
pub fn get_eth_balance_multiple(addresses: &[Address]) -> EndpointResult<String> {
    if addresses.is_empty() {
        return Err(EndpointError::empty_list("addresses"));
    }

    let joined = addresses
        .iter()
        .map(render_address)
        .collect::<Vec<_>>()
        .join(",");

    Ok(Query::new(ApiModule::Account, Action::BalanceMulti)
        .field(Field::Address, joined)
        .field(Field::Tag, "latest")
        .finish())
}

/// Normal transactions sent from or to an address
pub fn get_normal_txs_by_address(address: &Address, blocks: BlockRange, sort: Sort) -> String {
    by_address(Action::TxList, address, blocks, None, sort)
}

/// One page of the normal transactions of an address
pub fn get_normal_txs_by_address_paginated(
    address: &Address,
    page: Pagination,
    blocks: BlockRange,
    sort: Sort,
) -> String {
    by_address(Action::TxList, address, blocks, Some(page), sort)
}

/// Internal transactions of an address
pub fn get_internal_txs_by_address(address: &Address, blocks: BlockRange, sort: Sort) -> String {
    by_address(Action::TxListInternal, address, blocks, None, sort)
}

/// One page of the internal transactions of an address
pub fn get_internal_txs_by_address_paginated(
    address: &Address,
    page: Pagination,
    blocks: BlockRange,
    sort: Sort,
) -> String {
    by_address(Action::TxListInternal, address, blocks, Some(page), sort)
}

/// Internal transactions created by one transaction
pub fn get_internal_txs_by_txhash(txhash: &TxHash) -> String {
    Query::new(ApiModule::Account, Action::TxListInternal)
        .field(Field::TxHash, render_hash(txhash))
        .finish()
}

/// One page of the internal transactions within a block range
pub fn get_internal_txs_by_block_range_paginated(
    blocks: BlockRange,
    page: Pagination,
    sort: Sort,
) -> String {
    Query::new(ApiModule::Account, Action::TxListInternal)
        .field(Field::StartBlock, blocks.start())
        .field(Field::EndBlock, blocks.end())
        .field(Field::Page, page.page())
        .field(Field::Offset, page.offset())
        .field(Field::Sort, sort)
        .finish()
}

/// ERC-20 transfer events involving an address
pub fn get_erc20_token_transfer_events_by_address(
    address: &Address,
    blocks: BlockRange,
    sort: Sort,
) -> String {
    by_address(Action::TokenTx, address, blocks, None, sort)
}

/// One page of the ERC-20 transfer events of a token contract
pub fn get_erc20_token_transfer_events_by_contract_address_paginated(
    contract_address: &Address,
    page: Pagination,
    sort: Sort,
) -> String {
    by_contract(Action::TokenTx, contract_address, None, page, sort)
}

/// One page of the ERC-20 transfer events of a token contract involving an address
pub fn get_erc20_token_transfer_events_by_address_and_contract_paginated(
    contract_address: &Address,
    address: &Address,
    page: Pagination,
    sort: Sort,
) -> String {
    by_contract(Action::TokenTx, contract_address, Some(address), page, sort)
}

/// ERC-721 transfer events involving an address
pub fn get_erc721_token_transfer_events_by_address(
    address: &Address,
    blocks: BlockRange,
    sort: Sort,
) -> String {
    by_address(Action::TokenNftTx, address, blocks, None, sort)
}

/// One page of the ERC-721 transfer events of a token contract
pub fn get_erc721_token_transfer_events_by_contract_address_paginated(
    contract_address: &Address,
    page: Pagination,
    sort: Sort,
) -> String {
    by_contract(Action::TokenNftTx, contract_address, None, page, sort)
}

/// One page of the ERC-721 transfer events of a token contract involving an address
pub fn get_erc721_token_transfer_events_by_address_and_contract_paginated(
    contract_address: &Address,
    address: &Address,
    page: Pagination,
    sort: Sort,
) -> String {
    by_contract(Action::TokenNftTx, contract_address, Some(address), page, sort)
}

/// Blocks validated by an address
pub fn get_mined_blocks_by_address(address: &Address) -> String {
    mined_blocks(address).finish()
}

/// One page of the blocks validated by an address
pub fn get_mined_blocks_by_address_paginated(address: &Address, page: Pagination) -> String {
    mined_blocks(address)
        .field(Field::Page, page.page())
        .field(Field::Offset, page.offset())
        .finish()
}

fn by_address(
    action: Action,
    address: &Address,
    blocks: BlockRange,
    page: Option<Pagination>,
    sort: Sort,
) -> String {
    let mut query = Query::new(ApiModule::Account, action)
        .field(Field::Address, render_address(address))
        .field(Field::StartBlock, blocks.start())
        .field(Field::EndBlock, blocks.end());

    if let Some(page) = page {
        query = query
            .field(Field::Page, page.page())
            .field(Field::Offset, page.offset());
    }

    query.field(Field::Sort, sort).finish()
}

fn by_contract(
    action: Action,
    contract_address: &Address,
    address: Option<&Address>,
    page: Pagination,
    sort: Sort,
) -> String {
    let mut query = Query::new(ApiModule::Account, action)
        .field(Field::ContractAddress, render_address(contract_address));

    if let Some(address) = address {
        query = query.field(Field::Address, render_address(address));
    }

    query
        .field(Field::Page, page.page())
        .field(Field::Offset, page.offset())
        .field(Field::Sort, sort)
        .finish()
}

fn mined_blocks(address: &Address) -> Query {
    Query::new(ApiModule::Account, Action::GetMinedBlocks)
        .field(Field::Address, render_address(address))
        .field(Field::BlockType, "blocks")
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;

    use super::*;

    fn address() -> Address {
        Address::repeat_byte(0xab)
    }

    #[test]
    fn eth_balance_fragment() {
        let address = address();
        assert_eq!(
            get_eth_balance(&address),
            format!(
                "module=account&action=balance&address={}&tag=latest",
                address.to_checksum(None)
            )
        );
    }

    #[test]
    fn eth_balance_multiple_joins_addresses() {
        let first = Address::repeat_byte(0x01);
        let second = Address::repeat_byte(0x02);
        let fragment = get_eth_balance_multiple(&[first, second]).unwrap();
        assert_eq!(
            fragment,
            format!(
                "module=account&action=balancemulti&address={},{}&tag=latest",
                first.to_checksum(None),
                second.to_checksum(None)
            )
        );
    }

    #[test]
    fn eth_balance_multiple_rejects_empty_list() {
        assert_eq!(
            get_eth_balance_multiple(&[]).unwrap_err(),
            EndpointError::empty_list("addresses")
        );
    }

    #[test]
    fn normal_txs_fragment_orders_fields() {
        let fragment = get_normal_txs_by_address(
            &address(),
            BlockRange::new(0, 99_999_999).unwrap(),
            Sort::Asc,
        );
        assert!(fragment.starts_with("module=account&action=txlist&address="));
        assert!(fragment.ends_with("&startblock=0&endblock=99999999&sort=asc"));
    }

    #[test]
    fn paginated_fragment_places_page_before_sort() {
        let fragment = get_normal_txs_by_address_paginated(
            &address(),
            Pagination::new(2, 50).unwrap(),
            BlockRange::new(100, 200).unwrap(),
            Sort::Desc,
        );
        assert!(fragment.ends_with("&startblock=100&endblock=200&page=2&offset=50&sort=desc"));
    }

    #[test]
    fn internal_txs_by_hash() {
        let hash = B256::repeat_byte(0x0f);
        assert_eq!(
            get_internal_txs_by_txhash(&hash),
            format!("module=account&action=txlistinternal&txhash=0x{}", "0f".repeat(32))
        );
    }

    #[test]
    fn internal_txs_by_block_range() {
        let fragment = get_internal_txs_by_block_range_paginated(
            BlockRange::new(13_481_773, 13_491_773).unwrap(),
            Pagination::new(1, 10).unwrap(),
            Sort::Asc,
        );
        assert_eq!(
            fragment,
            "module=account&action=txlistinternal&startblock=13481773&endblock=13491773&page=1&offset=10&sort=asc"
        );
    }

    #[test]
    fn token_transfer_fragments() {
        let contract = Address::repeat_byte(0xcc);
        let holder = Address::repeat_byte(0xdd);
        let page = Pagination::new(1, 100).unwrap();

        let by_contract =
            get_erc20_token_transfer_events_by_contract_address_paginated(&contract, page, Sort::Asc);
        assert_eq!(
            by_contract,
            format!(
                "module=account&action=tokentx&contractaddress={}&page=1&offset=100&sort=asc",
                contract.to_checksum(None)
            )
        );

        let by_both = get_erc721_token_transfer_events_by_address_and_contract_paginated(
            &contract,
            &holder,
            page,
            Sort::Desc,
        );
        assert_eq!(
            by_both,
            format!(
                "module=account&action=tokennfttx&contractaddress={}&address={}&page=1&offset=100&sort=desc",
                contract.to_checksum(None),
                holder.to_checksum(None)
            )
        );
    }

    #[test]
    fn mined_blocks_fragments() {
        let address = address();
        let plain = get_mined_blocks_by_address(&address);
        assert!(plain.ends_with("&blocktype=blocks"));

        let paged = get_mined_blocks_by_address_paginated(&address, Pagination::new(3, 5).unwrap());
        assert!(paged.ends_with("&blocktype=blocks&page=3&offset=5"));
    }
}
