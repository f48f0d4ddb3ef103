// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint registry
//!
//! Explicit table mapping every endpoint name to its owning [`Module`], its
//! declared parameter order and a builder that turns untyped arguments into
//! the query fragment. The facade binds entries of this table according to
//! its configuration; nothing here is looked up by reflection.

use std::{collections::BTreeMap, fmt, str::FromStr};

use alloy_primitives::{Address, Bytes, TxHash, U256};
use etherscan_endpoints::{
    BlockRange, BlockTag, ClientType, Closest, DateRange, EndpointError, EndpointResult, Module,
    Pagination, Sort, SyncMode, accounts, blocks, contracts, gas_tracker, params, pro, proxies,
    stats, tokens, transactions,
};

use crate::{config::EndpointConfig, error::ConfigError};

type BuildFn = fn(&BoundArgs<'_>) -> EndpointResult<String>;

/// A registered endpoint
pub struct EndpointSpec {
    /// Endpoint name, as used in the configuration and by [`crate::Etherscan::call`]
    pub name: &'static str,
    /// Module owning the endpoint
    pub module: Module,
    /// Parameter names, in positional order
    pub params: &'static [&'static str],
    build: BuildFn,
}

impl EndpointSpec {
    /// Build the query fragment from untyped arguments
    pub fn fragment(&self, args: &EndpointArgs) -> EndpointResult<String> {
        let bound = args.bind(self.params)?;
        (self.build)(&bound)
    }
}

impl fmt::Debug for EndpointSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointSpec")
            .field("name", &self.name)
            .field("module", &self.module)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Untyped endpoint arguments, given by position, by name, or both
///
/// Positional arguments fill the endpoint's parameters in declaration order;
/// named arguments fill the parameter they name. Blank values count as absent.
///
/// ```rust
/// use etherscan::EndpointArgs;
///
/// let args = EndpointArgs::positional(["0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe"])
///     .with("sort", "desc");
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointArgs {
    positional: Vec<String>,
    named: BTreeMap<String, String>,
}

impl EndpointArgs {
    /// No arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments given by position
    pub fn positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: BTreeMap::new(),
        }
    }

    /// Append a positional argument
    #[must_use]
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument, replacing any earlier value for the same name
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Total number of arguments
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Whether no argument was given
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bind(&self, params: &'static [&'static str]) -> EndpointResult<BoundArgs<'_>> {
        if self.positional.len() > params.len() {
            return Err(EndpointError::TooManyArguments {
                expected: params.len(),
                given: self.positional.len(),
            });
        }

        if let Some(name) = self.named.keys().find(|name| !params.contains(&name.as_str())) {
            return Err(EndpointError::UnexpectedArgument { name: name.clone() });
        }

        let mut values = Vec::with_capacity(params.len());
        for (index, &param) in params.iter().enumerate() {
            let by_position = self.positional.get(index).map(String::as_str);
            let by_name = self.named.get(param).map(String::as_str);
            if by_position.is_some() && by_name.is_some() {
                return Err(EndpointError::invalid(
                    param,
                    "given both by position and by name",
                ));
            }
            values.push(
                by_position
                    .or(by_name)
                    .map(str::trim)
                    .filter(|value| !value.is_empty()),
            );
        }

        Ok(BoundArgs { params, values })
    }
}

/// Arguments matched against an endpoint's parameter list
#[derive(Debug)]
pub struct BoundArgs<'a> {
    params: &'static [&'static str],
    values: Vec<Option<&'a str>>,
}

impl<'a> BoundArgs<'a> {
    fn raw(&self, name: &str) -> Option<&'a str> {
        self.params
            .iter()
            .position(|param| *param == name)
            .and_then(|index| self.values[index])
    }

    fn value(&self, name: &str) -> EndpointResult<&'a str> {
        self.raw(name).ok_or_else(|| EndpointError::missing(name))
    }

    fn parse<T>(&self, name: &str) -> EndpointResult<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        params::parse_arg(name, self.value(name)?)
    }

    fn quantity<T: TryFrom<u128>>(&self, name: &str) -> EndpointResult<T> {
        params::parse_quantity(name, self.value(name)?)
    }

    fn list<T>(&self, name: &str) -> EndpointResult<Vec<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        params::parse_list(name, self.value(name)?)
    }

    fn sort(&self) -> EndpointResult<Sort> {
        self.raw("sort")
            .map_or(Ok(Sort::default()), |raw| params::parse_arg("sort", raw))
    }

    fn blocks(&self) -> EndpointResult<BlockRange> {
        BlockRange::new(self.parse("startblock")?, self.parse("endblock")?)
    }

    fn page(&self) -> EndpointResult<Pagination> {
        Pagination::new(self.parse("page")?, self.parse("offset")?)
    }

    fn dates(&self) -> EndpointResult<DateRange> {
        DateRange::parse(self.value("start_date")?, self.value("end_date")?)
    }

    fn address(&self, name: &str) -> EndpointResult<Address> {
        self.parse(name)
    }

    fn txhash(&self) -> EndpointResult<TxHash> {
        self.parse("txhash")
    }

    fn data(&self, name: &str) -> EndpointResult<Bytes> {
        let raw = self.value(name)?;
        if !raw.starts_with("0x") {
            return Err(EndpointError::invalid(name, "expected 0x-prefixed hex"));
        }
        params::parse_arg(name, raw)
    }
}

macro_rules! endpoint {
    ($module:ident, $name:ident, [$($param:literal),*], $build:expr) => {
        EndpointSpec {
            name: stringify!($name),
            module: Module::$module,
            params: &[$($param),*],
            build: $build,
        }
    };
}

static REGISTRY: &[EndpointSpec] = &[
    // accounts
    endpoint!(Accounts, get_eth_balance, ["address"], |args| {
        Ok(accounts::get_eth_balance(&args.address("address")?))
    }),
    endpoint!(Accounts, get_eth_balance_multiple, ["addresses"], |args| {
        accounts::get_eth_balance_multiple(&args.list::<Address>("addresses")?)
    }),
    endpoint!(
        Accounts,
        get_normal_txs_by_address,
        ["address", "startblock", "endblock", "sort"],
        |args| {
            Ok(accounts::get_normal_txs_by_address(
                &args.address("address")?,
                args.blocks()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(
        Accounts,
        get_normal_txs_by_address_paginated,
        ["address", "page", "offset", "startblock", "endblock", "sort"],
        |args| {
            Ok(accounts::get_normal_txs_by_address_paginated(
                &args.address("address")?,
                args.page()?,
                args.blocks()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(
        Accounts,
        get_internal_txs_by_address,
        ["address", "startblock", "endblock", "sort"],
        |args| {
            Ok(accounts::get_internal_txs_by_address(
                &args.address("address")?,
                args.blocks()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(
        Accounts,
        get_internal_txs_by_address_paginated,
        ["address", "page", "offset", "startblock", "endblock", "sort"],
        |args| {
            Ok(accounts::get_internal_txs_by_address_paginated(
                &args.address("address")?,
                args.page()?,
                args.blocks()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(Accounts, get_internal_txs_by_txhash, ["txhash"], |args| {
        Ok(accounts::get_internal_txs_by_txhash(&args.txhash()?))
    }),
    endpoint!(
        Accounts,
        get_internal_txs_by_block_range_paginated,
        ["startblock", "endblock", "page", "offset", "sort"],
        |args| {
            Ok(accounts::get_internal_txs_by_block_range_paginated(
                args.blocks()?,
                args.page()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(
        Accounts,
        get_erc20_token_transfer_events_by_address,
        ["address", "startblock", "endblock", "sort"],
        |args| {
            Ok(accounts::get_erc20_token_transfer_events_by_address(
                &args.address("address")?,
                args.blocks()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(
        Accounts,
        get_erc20_token_transfer_events_by_contract_address_paginated,
        ["contract_address", "page", "offset", "sort"],
        |args| {
            Ok(
                accounts::get_erc20_token_transfer_events_by_contract_address_paginated(
                    &args.address("contract_address")?,
                    args.page()?,
                    args.sort()?,
                ),
            )
        }
    ),
    endpoint!(
        Accounts,
        get_erc20_token_transfer_events_by_address_and_contract_paginated,
        ["contract_address", "address", "page", "offset", "sort"],
        |args| {
            Ok(
                accounts::get_erc20_token_transfer_events_by_address_and_contract_paginated(
                    &args.address("contract_address")?,
                    &args.address("address")?,
                    args.page()?,
                    args.sort()?,
                ),
            )
        }
    ),
    endpoint!(
        Accounts,
        get_erc721_token_transfer_events_by_address,
        ["address", "startblock", "endblock", "sort"],
        |args| {
            Ok(accounts::get_erc721_token_transfer_events_by_address(
                &args.address("address")?,
                args.blocks()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(
        Accounts,
        get_erc721_token_transfer_events_by_contract_address_paginated,
        ["contract_address", "page", "offset", "sort"],
        |args| {
            Ok(
                accounts::get_erc721_token_transfer_events_by_contract_address_paginated(
                    &args.address("contract_address")?,
                    args.page()?,
                    args.sort()?,
                ),
            )
        }
    ),
    endpoint!(
        Accounts,
        get_erc721_token_transfer_events_by_address_and_contract_paginated,
        ["contract_address", "address", "page", "offset", "sort"],
        |args| {
            Ok(
                accounts::get_erc721_token_transfer_events_by_address_and_contract_paginated(
                    &args.address("contract_address")?,
                    &args.address("address")?,
                    args.page()?,
                    args.sort()?,
                ),
            )
        }
    ),
    endpoint!(Accounts, get_mined_blocks_by_address, ["address"], |args| {
        Ok(accounts::get_mined_blocks_by_address(&args.address("address")?))
    }),
    endpoint!(
        Accounts,
        get_mined_blocks_by_address_paginated,
        ["address", "page", "offset"],
        |args| {
            Ok(accounts::get_mined_blocks_by_address_paginated(
                &args.address("address")?,
                args.page()?,
            ))
        }
    ),
    // blocks
    endpoint!(Blocks, get_block_reward_by_block_number, ["block_no"], |args| {
        Ok(blocks::get_block_reward_by_block_number(args.parse("block_no")?))
    }),
    endpoint!(
        Blocks,
        get_est_block_countdown_time_by_block_number,
        ["block_no"],
        |args| {
            Ok(blocks::get_est_block_countdown_time_by_block_number(
                args.parse("block_no")?,
            ))
        }
    ),
    endpoint!(
        Blocks,
        get_block_number_by_timestamp,
        ["timestamp", "closest"],
        |args| {
            Ok(blocks::get_block_number_by_timestamp(
                args.parse("timestamp")?,
                args.parse::<Closest>("closest")?,
            ))
        }
    ),
    // contracts
    endpoint!(Contracts, get_contract_abi, ["address"], |args| {
        Ok(contracts::get_contract_abi(&args.address("address")?))
    }),
    endpoint!(Contracts, get_contract_source_code, ["address"], |args| {
        Ok(contracts::get_contract_source_code(&args.address("address")?))
    }),
    // transactions
    endpoint!(Transactions, get_contract_execution_status, ["txhash"], |args| {
        Ok(transactions::get_contract_execution_status(&args.txhash()?))
    }),
    endpoint!(Transactions, get_tx_receipt_status, ["txhash"], |args| {
        Ok(transactions::get_tx_receipt_status(&args.txhash()?))
    }),
    // gastracker
    endpoint!(GasTracker, get_est_confirmation_time, ["gas_price"], |args| {
        Ok(gas_tracker::get_est_confirmation_time(args.parse("gas_price")?))
    }),
    endpoint!(GasTracker, get_gas_oracle, [], |_| Ok(gas_tracker::get_gas_oracle())),
    // stats
    endpoint!(Stats, get_total_eth_supply, [], |_| Ok(stats::get_total_eth_supply())),
    endpoint!(Stats, get_total_eth2_supply, [], |_| Ok(stats::get_total_eth2_supply())),
    endpoint!(Stats, get_eth_last_price, [], |_| Ok(stats::get_eth_last_price())),
    endpoint!(
        Stats,
        get_eth_nodes_size,
        ["start_date", "end_date", "client_type", "sync_mode", "sort"],
        |args| {
            Ok(stats::get_eth_nodes_size(
                args.dates()?,
                args.parse::<ClientType>("client_type")?,
                args.parse::<SyncMode>("sync_mode")?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(Stats, get_total_nodes_count, [], |_| Ok(stats::get_total_nodes_count())),
    // tokens
    endpoint!(
        Tokens,
        get_total_supply_by_contract_address,
        ["contract_address"],
        |args| {
            Ok(tokens::get_total_supply_by_contract_address(
                &args.address("contract_address")?,
            ))
        }
    ),
    endpoint!(
        Tokens,
        get_acc_balance_by_token_and_contract_address,
        ["contract_address", "address"],
        |args| {
            Ok(tokens::get_acc_balance_by_token_and_contract_address(
                &args.address("contract_address")?,
                &args.address("address")?,
            ))
        }
    ),
    // proxies
    endpoint!(Proxies, get_proxy_block_number, [], |_| {
        Ok(proxies::get_proxy_block_number())
    }),
    endpoint!(Proxies, get_proxy_block_by_number, ["tag"], |args| {
        Ok(proxies::get_proxy_block_by_number(args.parse::<BlockTag>("tag")?))
    }),
    endpoint!(
        Proxies,
        get_proxy_uncle_by_block_number_and_index,
        ["tag", "index"],
        |args| {
            Ok(proxies::get_proxy_uncle_by_block_number_and_index(
                args.parse::<BlockTag>("tag")?,
                args.quantity("index")?,
            ))
        }
    ),
    endpoint!(
        Proxies,
        get_proxy_block_transaction_count_by_number,
        ["tag"],
        |args| {
            Ok(proxies::get_proxy_block_transaction_count_by_number(
                args.parse::<BlockTag>("tag")?,
            ))
        }
    ),
    endpoint!(Proxies, get_proxy_transaction_by_hash, ["txhash"], |args| {
        Ok(proxies::get_proxy_transaction_by_hash(&args.txhash()?))
    }),
    endpoint!(
        Proxies,
        get_proxy_transaction_by_block_number_and_index,
        ["tag", "index"],
        |args| {
            Ok(proxies::get_proxy_transaction_by_block_number_and_index(
                args.parse::<BlockTag>("tag")?,
                args.quantity("index")?,
            ))
        }
    ),
    endpoint!(Proxies, get_proxy_transaction_count, ["address"], |args| {
        Ok(proxies::get_proxy_transaction_count(&args.address("address")?))
    }),
    endpoint!(Proxies, get_proxy_transaction_receipt, ["txhash"], |args| {
        Ok(proxies::get_proxy_transaction_receipt(&args.txhash()?))
    }),
    endpoint!(Proxies, get_proxy_call, ["to", "data"], |args| {
        Ok(proxies::get_proxy_call(&args.address("to")?, &args.data("data")?))
    }),
    endpoint!(Proxies, get_proxy_code_at, ["address"], |args| {
        Ok(proxies::get_proxy_code_at(&args.address("address")?))
    }),
    endpoint!(
        Proxies,
        get_proxy_storage_position_at,
        ["position", "address"],
        |args| {
            Ok(proxies::get_proxy_storage_position_at(
                args.parse::<U256>("position")?,
                &args.address("address")?,
            ))
        }
    ),
    endpoint!(Proxies, get_proxy_gas_price, [], |_| Ok(proxies::get_proxy_gas_price())),
    endpoint!(
        Proxies,
        get_proxy_est_gas,
        ["to", "value", "gas_price", "gas"],
        |args| {
            Ok(proxies::get_proxy_est_gas(
                &args.address("to")?,
                args.quantity("value")?,
                args.quantity("gas_price")?,
                args.quantity("gas")?,
            ))
        }
    ),
    // pro
    endpoint!(
        Pro,
        get_hist_eth_balance_for_address_by_block_no,
        ["address", "block_no"],
        |args| {
            Ok(pro::get_hist_eth_balance_for_address_by_block_no(
                &args.address("address")?,
                args.parse("block_no")?,
            ))
        }
    ),
    endpoint!(
        Pro,
        get_daily_average_block_size,
        ["start_date", "end_date", "sort"],
        |args| Ok(pro::get_daily_average_block_size(args.dates()?, args.sort()?))
    ),
    endpoint!(
        Pro,
        get_daily_block_count_and_rewards,
        ["start_date", "end_date", "sort"],
        |args| Ok(pro::get_daily_block_count_and_rewards(args.dates()?, args.sort()?))
    ),
    endpoint!(
        Pro,
        get_daily_block_rewards,
        ["start_date", "end_date", "sort"],
        |args| Ok(pro::get_daily_block_rewards(args.dates()?, args.sort()?))
    ),
    endpoint!(
        Pro,
        get_daily_average_block_time,
        ["start_date", "end_date", "sort"],
        |args| Ok(pro::get_daily_average_block_time(args.dates()?, args.sort()?))
    ),
    endpoint!(
        Pro,
        get_daily_uncle_block_count_and_rewards,
        ["start_date", "end_date", "sort"],
        |args| {
            Ok(pro::get_daily_uncle_block_count_and_rewards(
                args.dates()?,
                args.sort()?,
            ))
        }
    ),
    endpoint!(
        Pro,
        get_token_info_by_contract_address,
        ["contract_address"],
        |args| {
            Ok(pro::get_token_info_by_contract_address(
                &args.address("contract_address")?,
            ))
        }
    ),
];

/// Every registered endpoint
pub fn registry() -> &'static [EndpointSpec] {
    REGISTRY
}

/// Find a registered endpoint by name
pub fn lookup(name: &str) -> Option<&'static EndpointSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Endpoints bound on one facade instance, in configuration order
#[derive(Debug, Clone)]
pub(crate) struct EndpointTable {
    bound: Vec<&'static EndpointSpec>,
}

impl EndpointTable {
    /// Bind every enabled configuration entry against the registry
    pub(crate) fn resolve(config: &EndpointConfig) -> Result<Self, ConfigError> {
        let bound = config
            .enabled()
            .map(|entry| -> Result<&'static EndpointSpec, ConfigError> {
                let module: Module =
                    entry
                        .module()
                        .parse()
                        .map_err(|_| ConfigError::UnknownModule {
                            endpoint: entry.name().to_string(),
                            module: entry.module().to_string(),
                        })?;

                let spec = lookup(entry.name()).ok_or_else(|| ConfigError::UnknownEndpoint {
                    endpoint: entry.name().to_string(),
                    module: entry.module().to_string(),
                })?;

                if spec.module != module {
                    return Err(ConfigError::ModuleMismatch {
                        endpoint: entry.name().to_string(),
                        configured: module.to_string(),
                        expected: spec.module.to_string(),
                    });
                }
                Ok(spec)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bound })
    }

    pub(crate) fn get(&self, name: &str) -> Option<&'static EndpointSpec> {
        self.bound.iter().copied().find(|spec| spec.name == name)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bound.iter().map(|spec| spec.name)
    }

    pub(crate) fn len(&self) -> usize {
        self.bound.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ADDRESS: &str = "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe";
    const TXHASH: &str = "0x15f8e5ea1079d9a0bb04a4c58ae5fe7654b5b2b4463375ff7ffb490aa0032f3a";

    fn spec(name: &str) -> &'static EndpointSpec {
        lookup(name).unwrap()
    }

    #[test]
    fn proxy_quantities_accept_hex() {
        assert_eq!(
            spec("get_proxy_transaction_by_block_number_and_index")
                .fragment(&EndpointArgs::positional(["0x10d4f", "0x0"]))
                .unwrap(),
            "module=proxy&action=eth_getTransactionByBlockNumberAndIndex&tag=0x10d4f&index=0x0"
        );
        assert_eq!(
            spec("get_proxy_uncle_by_block_number_and_index")
                .fragment(&EndpointArgs::positional(["0x210A9B", "0x0"]))
                .unwrap(),
            spec("get_proxy_uncle_by_block_number_and_index")
                .fragment(&EndpointArgs::positional(["2165403", "0"]))
                .unwrap(),
        );

        let hex = spec("get_proxy_est_gas")
            .fragment(&EndpointArgs::positional([
                ADDRESS,
                "0xff22",
                "0x51da038cc",
                "0x5f5e0ff",
            ]))
            .unwrap();
        let decimal = spec("get_proxy_est_gas")
            .fragment(
                &EndpointArgs::new()
                    .with("to", ADDRESS)
                    .with("value", "65314")
                    .with("gas_price", "21971876044")
                    .with("gas", "99999999"),
            )
            .unwrap();
        assert_eq!(hex, decimal);
        assert!(hex.ends_with("&value=0xff22&gasPrice=0x51da038cc&gas=0x5f5e0ff"));
    }

    #[test]
    fn proxy_quantities_reject_malformed_hex() {
        let error = spec("get_proxy_transaction_by_block_number_and_index")
            .fragment(&EndpointArgs::positional(["latest", "0xg"]))
            .unwrap_err();
        assert!(matches!(error, EndpointError::InvalidArgument { ref name, .. } if name == "index"));
    }

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for spec in registry() {
            assert!(seen.insert(spec.name), "duplicate endpoint {}", spec.name);
        }
    }

    #[test]
    fn every_module_has_endpoints() {
        for &module in Module::all() {
            assert!(
                registry().iter().any(|spec| spec.module == module),
                "{module}"
            );
        }
    }

    #[test]
    fn positional_and_named_arguments_agree() {
        let positional = spec("get_normal_txs_by_address")
            .fragment(&EndpointArgs::positional([ADDRESS, "0", "99999999", "asc"]))
            .unwrap();
        let named = spec("get_normal_txs_by_address")
            .fragment(
                &EndpointArgs::new()
                    .with("sort", "asc")
                    .with("endblock", "99999999")
                    .with("startblock", "0")
                    .with("address", ADDRESS),
            )
            .unwrap();
        assert_eq!(positional, named);
        assert!(positional.ends_with("&startblock=0&endblock=99999999&sort=asc"));
    }

    #[test]
    fn sort_defaults_to_ascending() {
        let fragment = spec("get_normal_txs_by_address")
            .fragment(&EndpointArgs::positional([ADDRESS, "0", "10"]))
            .unwrap();
        assert!(fragment.ends_with("&sort=asc"));
    }

    #[test]
    fn argument_errors() {
        let balance = spec("get_eth_balance");

        assert_eq!(
            balance.fragment(&EndpointArgs::new()).unwrap_err(),
            EndpointError::missing("address")
        );
        assert_eq!(
            balance
                .fragment(&EndpointArgs::positional([ADDRESS, "extra"]))
                .unwrap_err(),
            EndpointError::TooManyArguments {
                expected: 1,
                given: 2
            }
        );
        assert_eq!(
            balance
                .fragment(&EndpointArgs::new().with("addr", ADDRESS))
                .unwrap_err(),
            EndpointError::UnexpectedArgument {
                name: "addr".to_string()
            }
        );
        assert_eq!(
            balance
                .fragment(&EndpointArgs::positional([ADDRESS]).with("address", ADDRESS))
                .unwrap_err()
                .argument(),
            Some("address")
        );
        assert_eq!(
            balance
                .fragment(&EndpointArgs::positional(["0x1234"]))
                .unwrap_err()
                .argument(),
            Some("address")
        );
        assert_eq!(
            balance
                .fragment(&EndpointArgs::positional(["  "]))
                .unwrap_err(),
            EndpointError::missing("address")
        );
    }

    #[test]
    fn address_lists() {
        let multiple = spec("get_eth_balance_multiple");
        let fragment = multiple
            .fragment(&EndpointArgs::positional([format!("{ADDRESS}, {ADDRESS}")]))
            .unwrap();
        let rendered = ADDRESS.parse::<Address>().unwrap().to_checksum(None);
        assert!(fragment.contains(&format!("&address={rendered},{rendered}&")));

        assert_eq!(
            multiple.fragment(&EndpointArgs::positional([","])).unwrap_err(),
            EndpointError::empty_list("addresses")
        );
    }

    #[test]
    fn hash_and_typed_parameters() {
        let fragment = spec("get_tx_receipt_status")
            .fragment(&EndpointArgs::positional([TXHASH]))
            .unwrap();
        assert_eq!(
            fragment,
            format!("module=transaction&action=gettxreceiptstatus&txhash={TXHASH}")
        );

        let fragment = spec("get_proxy_block_by_number")
            .fragment(&EndpointArgs::positional(["68943"]))
            .unwrap();
        assert!(fragment.contains("&tag=0x10d4f"));

        let error = spec("get_block_number_by_timestamp")
            .fragment(&EndpointArgs::positional(["1578638524", "sideways"]))
            .unwrap_err();
        assert_eq!(error.argument(), Some("closest"));
    }

    #[test]
    fn call_data_must_be_prefixed_hex() {
        let call = spec("get_proxy_call");
        assert!(
            call.fragment(&EndpointArgs::positional([ADDRESS, "0x70a08231"]))
                .unwrap()
                .ends_with("&data=0x70a08231")
        );
        assert_eq!(
            call.fragment(&EndpointArgs::positional([ADDRESS, "70a08231"]))
                .unwrap_err()
                .argument(),
            Some("data")
        );
    }

    #[test]
    fn parameterless_endpoints_reject_arguments() {
        let oracle = spec("get_gas_oracle");
        assert_eq!(
            oracle.fragment(&EndpointArgs::new()).unwrap(),
            "module=gastracker&action=gasoracle"
        );
        assert!(oracle.fragment(&EndpointArgs::positional(["1"])).is_err());
    }

    #[test]
    fn table_resolves_bundled_configuration() {
        let config = EndpointConfig::bundled().unwrap();
        let table = EndpointTable::resolve(&config).unwrap();
        assert_eq!(table.len(), config.enabled().count());
        assert!(table.get("get_eth_balance").is_some());
        assert!(table.get("get_daily_block_rewards").is_none());
        assert!(table.get("_get_daily_block_rewards").is_none());
    }

    #[test]
    fn every_non_pro_endpoint_is_enabled_in_bundled_configuration() {
        let config = EndpointConfig::bundled().unwrap();
        let table = EndpointTable::resolve(&config).unwrap();
        for spec in registry() {
            assert_eq!(
                table.get(spec.name).is_some(),
                spec.module != Module::Pro,
                "{}",
                spec.name
            );
        }
    }

    #[test]
    fn table_rejects_bad_entries() {
        let resolve = |json: &str| {
            EndpointTable::resolve(&EndpointConfig::from_json_str(json).unwrap()).unwrap_err()
        };

        assert!(matches!(
            resolve(r#"{"get_eth_balance": {"module": "nonexistent"}}"#),
            ConfigError::UnknownModule { .. }
        ));
        assert!(matches!(
            resolve(r#"{"get_everything": {"module": "accounts"}}"#),
            ConfigError::UnknownEndpoint { .. }
        ));
        assert!(matches!(
            resolve(r#"{"get_gas_oracle": {"module": "stats"}}"#),
            ConfigError::ModuleMismatch { .. }
        ));
    }

    #[test]
    fn disabled_entries_are_not_resolved() {
        let config = EndpointConfig::from_json_str(
            r#"{
                "_get_everything": {"module": "nonexistent"},
                "get_gas_oracle": {"module": "gastracker"}
            }"#,
        )
        .unwrap();
        let table = EndpointTable::resolve(&config).unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), ["get_gas_oracle"]);
    }
}
