// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Query-string vocabulary of the Etherscan API
//!
//! Field markers carry their own separators (`module=` opens a query, every
//! other marker starts with `&`), so fragments are assembled by plain
//! concatenation in a fixed order.

use std::fmt;

/// Default request prefix of the Etherscan v2 multichain API
pub const PREFIX: &str = "https://api.etherscan.io/v2/api?";

/// Query field markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Field {
    Module,
    Action,
    Address,
    ApiKey,
    BlockNo,
    BlockType,
    Boolean,
    ChainId,
    ClientType,
    Closest,
    ContractAddress,
    Data,
    EndBlock,
    EndDate,
    Gas,
    GasPrice,
    GasPriceWei,
    Index,
    Offset,
    Page,
    Position,
    Sort,
    StartBlock,
    StartDate,
    SyncMode,
    Tag,
    Timestamp,
    To,
    TxHash,
    Value,
}

impl Field {
    /// The marker inserted in front of the field value
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Module => "module=",
            Self::Action => "&action=",
            Self::Address => "&address=",
            Self::ApiKey => "&apikey=",
            Self::BlockNo => "&blockno=",
            Self::BlockType => "&blocktype=",
            Self::Boolean => "&boolean=",
            Self::ChainId => "&chainid=",
            Self::ClientType => "&clienttype=",
            Self::Closest => "&closest=",
            Self::ContractAddress => "&contractaddress=",
            Self::Data => "&data=",
            Self::EndBlock => "&endblock=",
            Self::EndDate => "&enddate=",
            Self::Gas => "&gas=",
            Self::GasPrice => "&gasPrice=",
            Self::GasPriceWei => "&gasprice=",
            Self::Index => "&index=",
            Self::Offset => "&offset=",
            Self::Page => "&page=",
            Self::Position => "&position=",
            Self::Sort => "&sort=",
            Self::StartBlock => "&startblock=",
            Self::StartDate => "&startdate=",
            Self::SyncMode => "&syncmode=",
            Self::Tag => "&tag=",
            Self::Timestamp => "&timestamp=",
            Self::To => "&to=",
            Self::TxHash => "&txhash=",
            Self::Value => "&value=",
        }
    }
}

/// Upstream module names, as sent in the `module` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ApiModule {
    Account,
    Block,
    Contract,
    GasTracker,
    Proxy,
    Stats,
    Token,
    Transaction,
}

impl ApiModule {
    /// Wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Block => "block",
            Self::Contract => "contract",
            Self::GasTracker => "gastracker",
            Self::Proxy => "proxy",
            Self::Stats => "stats",
            Self::Token => "token",
            Self::Transaction => "transaction",
        }
    }
}

/// Upstream action names, as sent in the `action` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Balance,
    BalanceMulti,
    BalanceHistory,
    TxList,
    TxListInternal,
    TokenTx,
    TokenNftTx,
    GetMinedBlocks,
    TokenBalance,
    GetBlockReward,
    GetBlockCountdown,
    GetBlockNoByTime,
    GetAbi,
    GetSourceCode,
    GetStatus,
    GetTxReceiptStatus,
    GasEstimate,
    GasOracle,
    EthSupply,
    EthSupply2,
    EthPrice,
    ChainSize,
    NodeCount,
    TokenSupply,
    TokenInfo,
    DailyAvgBlockSize,
    DailyBlkCount,
    DailyBlockRewards,
    DailyAvgBlockTime,
    DailyUncleBlkCount,
    EthBlockNumber,
    EthGetBlockByNumber,
    EthGetUncleByBlockNumberAndIndex,
    EthGetBlockTransactionCountByNumber,
    EthGetTransactionByHash,
    EthGetTransactionByBlockNumberAndIndex,
    EthGetTransactionCount,
    EthGetTransactionReceipt,
    EthCall,
    EthGetCode,
    EthGetStorageAt,
    EthGasPrice,
    EthEstimateGas,
}

impl Action {
    /// Wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::BalanceMulti => "balancemulti",
            Self::BalanceHistory => "balancehistory",
            Self::TxList => "txlist",
            Self::TxListInternal => "txlistinternal",
            Self::TokenTx => "tokentx",
            Self::TokenNftTx => "tokennfttx",
            Self::GetMinedBlocks => "getminedblocks",
            Self::TokenBalance => "tokenbalance",
            Self::GetBlockReward => "getblockreward",
            Self::GetBlockCountdown => "getblockcountdown",
            Self::GetBlockNoByTime => "getblocknobytime",
            Self::GetAbi => "getabi",
            Self::GetSourceCode => "getsourcecode",
            Self::GetStatus => "getstatus",
            Self::GetTxReceiptStatus => "gettxreceiptstatus",
            Self::GasEstimate => "gasestimate",
            Self::GasOracle => "gasoracle",
            Self::EthSupply => "ethsupply",
            Self::EthSupply2 => "ethsupply2",
            Self::EthPrice => "ethprice",
            Self::ChainSize => "chainsize",
            Self::NodeCount => "nodecount",
            Self::TokenSupply => "tokensupply",
            Self::TokenInfo => "tokeninfo",
            Self::DailyAvgBlockSize => "dailyavgblocksize",
            Self::DailyBlkCount => "dailyblkcount",
            Self::DailyBlockRewards => "dailyblockrewards",
            Self::DailyAvgBlockTime => "dailyavgblocktime",
            Self::DailyUncleBlkCount => "dailyuncleblkcount",
            Self::EthBlockNumber => "eth_blockNumber",
            Self::EthGetBlockByNumber => "eth_getBlockByNumber",
            Self::EthGetUncleByBlockNumberAndIndex => "eth_getUncleByBlockNumberAndIndex",
            Self::EthGetBlockTransactionCountByNumber => "eth_getBlockTransactionCountByNumber",
            Self::EthGetTransactionByHash => "eth_getTransactionByHash",
            Self::EthGetTransactionByBlockNumberAndIndex => {
                "eth_getTransactionByBlockNumberAndIndex"
            }
            Self::EthGetTransactionCount => "eth_getTransactionCount",
            Self::EthGetTransactionReceipt => "eth_getTransactionReceipt",
            Self::EthCall => "eth_call",
            Self::EthGetCode => "eth_getCode",
            Self::EthGetStorageAt => "eth_getStorageAt",
            Self::EthGasPrice => "eth_gasPrice",
            Self::EthEstimateGas => "eth_estimateGas",
        }
    }
}

/// Incremental builder for a query fragment
///
/// ```rust
/// use etherscan_endpoints::fields::{Action, ApiModule, Field, Query};
///
/// let fragment = Query::new(ApiModule::Stats, Action::EthPrice).finish();
/// assert_eq!(fragment, "module=stats&action=ethprice");
///
/// let fragment = Query::new(ApiModule::Block, Action::GetBlockReward)
///     .field(Field::BlockNo, 2_165_403)
///     .finish();
/// assert_eq!(fragment, "module=block&action=getblockreward&blockno=2165403");
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    buf: String,
}

impl Query {
    /// Start a fragment with its module and action fields
    pub fn new(module: ApiModule, action: Action) -> Self {
        let mut buf = String::with_capacity(96);
        buf.push_str(Field::Module.marker());
        buf.push_str(module.as_str());
        buf.push_str(Field::Action.marker());
        buf.push_str(action.as_str());
        Self { buf }
    }

    /// Append one field
    #[must_use]
    pub fn field(mut self, field: Field, value: impl fmt::Display) -> Self {
        self.buf.push_str(field.marker());
        self.buf.push_str(&value.to_string());
        self
    }

    /// Finish the fragment
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_starts_with_module_without_separator() {
        let fragment = Query::new(ApiModule::Account, Action::Balance).finish();
        assert_eq!(fragment, "module=account&action=balance");
        assert!(!fragment.starts_with('&'));
    }

    #[test]
    fn fields_keep_insertion_order() {
        let fragment = Query::new(ApiModule::Account, Action::TxList)
            .field(Field::StartBlock, 0)
            .field(Field::EndBlock, 99)
            .field(Field::Sort, "asc")
            .finish();
        assert_eq!(
            fragment,
            "module=account&action=txlist&startblock=0&endblock=99&sort=asc"
        );
    }

    #[test]
    fn every_marker_but_module_starts_with_ampersand() {
        for field in [
            Field::Action,
            Field::Address,
            Field::ApiKey,
            Field::ChainId,
            Field::GasPrice,
            Field::GasPriceWei,
            Field::TxHash,
        ] {
            assert!(field.marker().starts_with('&'), "{field:?}");
            assert!(field.marker().ends_with('='), "{field:?}");
        }
        assert_eq!(Field::Module.marker(), "module=");
    }

    #[test]
    fn prefix_ends_with_query_separator() {
        assert!(PREFIX.starts_with("https://"));
        assert!(PREFIX.ends_with('?'));
    }
}
