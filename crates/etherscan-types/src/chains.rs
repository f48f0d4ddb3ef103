// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockchain chain identifiers
//!
//! Etherscan's v2 API serves every supported network from a single host and
//! selects the network with the `chainid` query parameter. [`ChainId`] is the
//! value carried in that parameter: a plain integer with named constants for
//! the networks Etherscan documents. Any other integer is accepted as-is so
//! callers are never blocked on this list lagging behind the upstream service.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Numeric identifier of the chain a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    /// Ethereum Mainnet - Chain ID: 1
    pub const ETHEREUM_MAINNET: Self = Self(1);
    /// Sepolia Testnet - Chain ID: 11155111
    pub const SEPOLIA_TESTNET: Self = Self(11_155_111);
    /// Holesky Testnet - Chain ID: 17000
    pub const HOLESKY_TESTNET: Self = Self(17_000);
    /// Hoodi Testnet - Chain ID: 560048
    pub const HOODI_TESTNET: Self = Self(560_048);
    /// Polygon Mainnet - Chain ID: 137
    pub const POLYGON_MAINNET: Self = Self(137);
    /// Polygon Amoy Testnet - Chain ID: 80002
    pub const POLYGON_AMOY_TESTNET: Self = Self(80_002);
    /// Arbitrum One Mainnet - Chain ID: 42161
    pub const ARBITRUM_ONE_MAINNET: Self = Self(42_161);
    /// Arbitrum Nova Mainnet - Chain ID: 42170
    pub const ARBITRUM_NOVA_MAINNET: Self = Self(42_170);
    /// Arbitrum Sepolia Testnet - Chain ID: 421614
    pub const ARBITRUM_SEPOLIA_TESTNET: Self = Self(421_614);
    /// Base Mainnet - Chain ID: 8453
    pub const BASE_MAINNET: Self = Self(8453);
    /// Base Sepolia Testnet - Chain ID: 84532
    pub const BASE_SEPOLIA_TESTNET: Self = Self(84_532);
    /// OP Mainnet - Chain ID: 10
    pub const OP_MAINNET: Self = Self(10);
    /// OP Sepolia Testnet - Chain ID: 11155420
    pub const OP_SEPOLIA_TESTNET: Self = Self(11_155_420);
    /// BNB Smart Chain Mainnet - Chain ID: 56
    pub const BNB_SMART_CHAIN_MAINNET: Self = Self(56);
    /// BNB Smart Chain Testnet - Chain ID: 97
    pub const BNB_SMART_CHAIN_TESTNET: Self = Self(97);
    /// opBNB Mainnet - Chain ID: 204
    pub const OPBNB_MAINNET: Self = Self(204);
    /// Avalanche C-Chain - Chain ID: 43114
    pub const AVALANCHE_C_CHAIN: Self = Self(43_114);
    /// Avalanche Fuji Testnet - Chain ID: 43113
    pub const AVALANCHE_FUJI_TESTNET: Self = Self(43_113);
    /// Linea Mainnet - Chain ID: 59144
    pub const LINEA_MAINNET: Self = Self(59_144);
    /// Linea Sepolia Testnet - Chain ID: 59141
    pub const LINEA_SEPOLIA_TESTNET: Self = Self(59_141);
    /// Scroll Mainnet - Chain ID: 534352
    pub const SCROLL_MAINNET: Self = Self(534_352);
    /// Scroll Sepolia Testnet - Chain ID: 534351
    pub const SCROLL_SEPOLIA_TESTNET: Self = Self(534_351);
    /// zkSync Mainnet - Chain ID: 324
    pub const ZKSYNC_MAINNET: Self = Self(324);
    /// Blast Mainnet - Chain ID: 81457
    pub const BLAST_MAINNET: Self = Self(81_457);
    /// Gnosis - Chain ID: 100
    pub const GNOSIS: Self = Self(100);
    /// Mantle Mainnet - Chain ID: 5000
    pub const MANTLE_MAINNET: Self = Self(5000);
    /// Celo Mainnet - Chain ID: 42220
    pub const CELO_MAINNET: Self = Self(42_220);
    /// Fraxtal Mainnet - Chain ID: 252
    pub const FRAXTAL_MAINNET: Self = Self(252);
    /// Moonbeam Mainnet - Chain ID: 1284
    pub const MOONBEAM_MAINNET: Self = Self(1284);
    /// Moonriver Mainnet - Chain ID: 1285
    pub const MOONRIVER_MAINNET: Self = Self(1285);
    /// Unichain Mainnet - Chain ID: 130
    pub const UNICHAIN_MAINNET: Self = Self(130);
    /// Sonic Mainnet - Chain ID: 146
    pub const SONIC_MAINNET: Self = Self(146);
    /// World Mainnet - Chain ID: 480
    pub const WORLD_MAINNET: Self = Self(480);
    /// Taiko Mainnet - Chain ID: 167000
    pub const TAIKO_MAINNET: Self = Self(167_000);
    /// BitTorrent Chain Mainnet - Chain ID: 199
    pub const BITTORRENT_CHAIN_MAINNET: Self = Self(199);
    /// XDC Mainnet - Chain ID: 50
    pub const XDC_MAINNET: Self = Self(50);
    /// Berachain Mainnet - Chain ID: 80094
    pub const BERACHAIN_MAINNET: Self = Self(80_094);
    /// ApeChain Mainnet - Chain ID: 33139
    pub const APECHAIN_MAINNET: Self = Self(33_139);
    /// Abstract Mainnet - Chain ID: 2741
    pub const ABSTRACT_MAINNET: Self = Self(2741);
    /// Sei Mainnet - Chain ID: 1329
    pub const SEI_MAINNET: Self = Self(1329);
    /// Cronos Mainnet - Chain ID: 25
    pub const CRONOS_MAINNET: Self = Self(25);

    /// Wrap a raw chain id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric chain ID
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns the human-readable name of the chain, if it is a known network
    pub fn name(self) -> Option<&'static str> {
        KnownChain::lookup(self).map(|known| known.name)
    }

    /// Returns the constant name of the chain (e.g. `ARBITRUM_ONE_MAINNET`), if known
    pub fn constant_name(self) -> Option<&'static str> {
        KnownChain::lookup(self).map(|known| known.constant)
    }

    /// Returns whether this id is one of the named networks
    pub fn is_known(self) -> bool {
        KnownChain::lookup(self).is_some()
    }

    /// Returns every named chain, in declaration order
    pub fn known() -> impl Iterator<Item = Self> {
        KNOWN_CHAINS.iter().map(|known| known.id)
    }
}

impl Default for ChainId {
    fn default() -> Self {
        Self::ETHEREUM_MAINNET
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.0
    }
}

/// Renders the numeric id, which is what the wire format carries
impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = ChainIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        // First try to parse as a numeric chain ID
        if let Ok(id) = s.parse::<u64>() {
            return Self::try_from_id(id);
        }

        let constant = s.to_uppercase().replace(['-', ' '], "_");
        let alias = s.to_lowercase();
        KNOWN_CHAINS
            .iter()
            .find(|known| {
                known.constant == constant
                    || known.name.eq_ignore_ascii_case(s)
                    || known.aliases.contains(&alias.as_str())
            })
            .map(|known| known.id)
            .ok_or_else(|| ChainIdParseError::InvalidName(s.to_string()))
    }
}

impl ChainId {
    fn try_from_id(id: u64) -> Result<Self, ChainIdParseError> {
        if id == 0 {
            return Err(ChainIdParseError::InvalidId(id));
        }
        Ok(Self(id))
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChainIdVisitor;

        impl serde::de::Visitor<'_> for ChainIdVisitor {
            type Value = ChainId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a positive chain ID (1, 137, 42161, ...), a chain ID string (\"137\"), or a chain name (Ethereum, Polygon, ARBITRUM_ONE_MAINNET, ...)"
                )
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ChainId::try_from_id(value).map_err(|_| {
                    E::invalid_value(serde::de::Unexpected::Unsigned(value), &"a non-zero chain ID")
                })
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(value)
                    .ok()
                    .and_then(|id| ChainId::try_from_id(id).ok())
                    .ok_or_else(|| {
                        E::invalid_value(
                            serde::de::Unexpected::Signed(value),
                            &"a non-zero chain ID",
                        )
                    })
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ChainId::from_str(value).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Str(value),
                        &"a chain ID or a known chain name",
                    )
                })
            }
        }

        deserializer.deserialize_any(ChainIdVisitor)
    }
}

/// Error type for chain ID parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainIdParseError {
    /// Chain ID zero is reserved and never valid
    #[error("invalid chain ID: {0}")]
    InvalidId(u64),
    /// Name does not match any known chain
    #[error("unknown chain name: {0}. Use a numeric chain ID or one of the names listed by `ChainId::known()`")]
    InvalidName(String),
}

struct KnownChain {
    id: ChainId,
    constant: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
}

impl KnownChain {
    fn lookup(id: ChainId) -> Option<&'static Self> {
        KNOWN_CHAINS.iter().find(|known| known.id == id)
    }
}

macro_rules! known {
    ($id:ident, $name:literal $(, $alias:literal)* $(,)?) => {
        KnownChain {
            id: ChainId::$id,
            constant: stringify!($id),
            name: $name,
            aliases: &[$($alias),*],
        }
    };
}

const KNOWN_CHAINS: &[KnownChain] = &[
    known!(ETHEREUM_MAINNET, "Ethereum Mainnet", "ethereum", "eth", "mainnet"),
    known!(SEPOLIA_TESTNET, "Sepolia Testnet", "sepolia"),
    known!(HOLESKY_TESTNET, "Holesky Testnet", "holesky"),
    known!(HOODI_TESTNET, "Hoodi Testnet", "hoodi"),
    known!(POLYGON_MAINNET, "Polygon Mainnet", "polygon", "matic"),
    known!(POLYGON_AMOY_TESTNET, "Polygon Amoy Testnet", "amoy"),
    known!(ARBITRUM_ONE_MAINNET, "Arbitrum One Mainnet", "arbitrum", "arb"),
    known!(ARBITRUM_NOVA_MAINNET, "Arbitrum Nova Mainnet", "arbitrum-nova"),
    known!(ARBITRUM_SEPOLIA_TESTNET, "Arbitrum Sepolia Testnet", "arbitrum-sepolia"),
    known!(BASE_MAINNET, "Base Mainnet", "base"),
    known!(BASE_SEPOLIA_TESTNET, "Base Sepolia Testnet", "base-sepolia"),
    known!(OP_MAINNET, "OP Mainnet", "optimism", "op"),
    known!(OP_SEPOLIA_TESTNET, "OP Sepolia Testnet", "optimism-sepolia"),
    known!(BNB_SMART_CHAIN_MAINNET, "BNB Smart Chain Mainnet", "bsc", "bnb"),
    known!(BNB_SMART_CHAIN_TESTNET, "BNB Smart Chain Testnet", "bsc-testnet"),
    known!(OPBNB_MAINNET, "opBNB Mainnet", "opbnb"),
    known!(AVALANCHE_C_CHAIN, "Avalanche C-Chain", "avalanche", "avax"),
    known!(AVALANCHE_FUJI_TESTNET, "Avalanche Fuji Testnet", "fuji"),
    known!(LINEA_MAINNET, "Linea Mainnet", "linea"),
    known!(LINEA_SEPOLIA_TESTNET, "Linea Sepolia Testnet", "linea-sepolia"),
    known!(SCROLL_MAINNET, "Scroll Mainnet", "scroll"),
    known!(SCROLL_SEPOLIA_TESTNET, "Scroll Sepolia Testnet", "scroll-sepolia"),
    known!(ZKSYNC_MAINNET, "zkSync Mainnet", "zksync"),
    known!(BLAST_MAINNET, "Blast Mainnet", "blast"),
    known!(GNOSIS, "Gnosis", "gnosis", "xdai"),
    known!(MANTLE_MAINNET, "Mantle Mainnet", "mantle"),
    known!(CELO_MAINNET, "Celo Mainnet", "celo"),
    known!(FRAXTAL_MAINNET, "Fraxtal Mainnet", "fraxtal"),
    known!(MOONBEAM_MAINNET, "Moonbeam Mainnet", "moonbeam"),
    known!(MOONRIVER_MAINNET, "Moonriver Mainnet", "moonriver"),
    known!(UNICHAIN_MAINNET, "Unichain Mainnet", "unichain"),
    known!(SONIC_MAINNET, "Sonic Mainnet", "sonic"),
    known!(WORLD_MAINNET, "World Mainnet", "world", "worldchain"),
    known!(TAIKO_MAINNET, "Taiko Mainnet", "taiko"),
    known!(BITTORRENT_CHAIN_MAINNET, "BitTorrent Chain Mainnet", "bittorrent", "bttc"),
    known!(XDC_MAINNET, "XDC Mainnet", "xdc"),
    known!(BERACHAIN_MAINNET, "Berachain Mainnet", "berachain"),
    known!(APECHAIN_MAINNET, "ApeChain Mainnet", "apechain"),
    known!(ABSTRACT_MAINNET, "Abstract Mainnet", "abstract"),
    known!(SEI_MAINNET, "Sei Mainnet", "sei"),
    known!(CRONOS_MAINNET, "Cronos Mainnet", "cronos"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ethereum_mainnet() {
        assert_eq!(ChainId::default(), ChainId::ETHEREUM_MAINNET);
        assert_eq!(ChainId::default().id(), 1);
    }

    #[test]
    fn chain_id_numeric_conversion() {
        assert_eq!(ChainId::ETHEREUM_MAINNET.id(), 1);
        assert_eq!(ChainId::POLYGON_MAINNET.id(), 137);
        assert_eq!(ChainId::ARBITRUM_ONE_MAINNET.id(), 42161);
        assert_eq!(ChainId::BASE_MAINNET.id(), 8453);
        assert_eq!(u64::from(ChainId::OP_MAINNET), 10);
        assert_eq!(ChainId::from(424_242).id(), 424_242);
    }

    #[test]
    fn names_for_known_and_unknown_chains() {
        assert_eq!(ChainId::POLYGON_MAINNET.name(), Some("Polygon Mainnet"));
        assert_eq!(
            ChainId::ARBITRUM_ONE_MAINNET.constant_name(),
            Some("ARBITRUM_ONE_MAINNET")
        );
        assert!(ChainId::SEPOLIA_TESTNET.is_known());

        let custom = ChainId::new(999_999_999);
        assert_eq!(custom.name(), None);
        assert!(!custom.is_known());
    }

    #[test]
    fn display_is_numeric() {
        assert_eq!(ChainId::ARBITRUM_ONE_MAINNET.to_string(), "42161");
        assert_eq!(ChainId::new(7).to_string(), "7");
    }

    #[test]
    fn chain_id_from_str() {
        // Numeric ids, known or not
        assert_eq!(ChainId::from_str("137").unwrap(), ChainId::POLYGON_MAINNET);
        assert_eq!(ChainId::from_str(" 1 ").unwrap(), ChainId::ETHEREUM_MAINNET);
        assert_eq!(ChainId::from_str("31337").unwrap(), ChainId::new(31337));

        // Constant names, any case, dashes or spaces for underscores
        assert_eq!(
            ChainId::from_str("ARBITRUM_ONE_MAINNET").unwrap(),
            ChainId::ARBITRUM_ONE_MAINNET
        );
        assert_eq!(
            ChainId::from_str("polygon-mainnet").unwrap(),
            ChainId::POLYGON_MAINNET
        );

        // Display names and aliases
        assert_eq!(
            ChainId::from_str("Base Mainnet").unwrap(),
            ChainId::BASE_MAINNET
        );
        assert_eq!(ChainId::from_str("MATIC").unwrap(), ChainId::POLYGON_MAINNET);
        assert_eq!(ChainId::from_str("arb").unwrap(), ChainId::ARBITRUM_ONE_MAINNET);
        assert_eq!(ChainId::from_str("bsc").unwrap(), ChainId::BNB_SMART_CHAIN_MAINNET);

        assert_eq!(
            ChainId::from_str("0").unwrap_err(),
            ChainIdParseError::InvalidId(0)
        );
        assert!(matches!(
            ChainId::from_str("atlantis"),
            Err(ChainIdParseError::InvalidName(_))
        ));
    }

    #[test]
    fn serde_serialization() {
        let serialized = serde_json::to_string(&ChainId::POLYGON_MAINNET).unwrap();
        assert_eq!(serialized, "137");
    }

    #[test]
    fn serde_deserialization() {
        let numeric: ChainId = serde_json::from_str("42161").unwrap();
        assert_eq!(numeric, ChainId::ARBITRUM_ONE_MAINNET);

        let numeric_string: ChainId = serde_json::from_str("\"8453\"").unwrap();
        assert_eq!(numeric_string, ChainId::BASE_MAINNET);

        let name: ChainId = serde_json::from_str("\"polygon\"").unwrap();
        assert_eq!(name, ChainId::POLYGON_MAINNET);

        assert!(serde_json::from_str::<ChainId>("0").is_err());
        assert!(serde_json::from_str::<ChainId>("-5").is_err());
        assert!(serde_json::from_str::<ChainId>("\"UNKNOWN\"").is_err());
    }

    #[test]
    fn known_chains_are_unique() {
        let mut ids = std::collections::HashSet::new();
        let mut constants = std::collections::HashSet::new();

        for known in KNOWN_CHAINS {
            assert!(ids.insert(known.id), "Duplicate chain ID: {}", known.id);
            assert!(
                constants.insert(known.constant),
                "Duplicate constant: {}",
                known.constant
            );
        }

        assert_eq!(ChainId::known().count(), KNOWN_CHAINS.len());
    }

    #[test]
    fn known_chains_round_trip_through_names() {
        for chain in ChainId::known() {
            let constant = chain.constant_name().unwrap();
            assert_eq!(ChainId::from_str(constant).unwrap(), chain);

            let name = chain.name().unwrap();
            assert_eq!(ChainId::from_str(name).unwrap(), chain, "{name}");
        }
    }
}
