//! Chain Domain Model
//!
//! The fixed set of supported blockchain networks and their static metadata.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Canonical identifier of a supported blockchain network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
    Ethereum,
    Arbitrum,
    Polygon,
    BinanceSmartChain,
    Fantom,
    Avalanche,
    Cronos,
}

impl Chain {
    /// Every supported chain
    pub const ALL: [Chain; 7] = [
        Chain::Ethereum,
        Chain::Arbitrum,
        Chain::Polygon,
        Chain::BinanceSmartChain,
        Chain::Fantom,
        Chain::Avalanche,
        Chain::Cronos,
    ];

    /// Canonical name, matching the serialized form
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Arbitrum => "arbitrum",
            Self::Polygon => "polygon",
            Self::BinanceSmartChain => "binance-smart-chain",
            Self::Fantom => "fantom",
            Self::Avalanche => "avalanche",
            Self::Cronos => "cronos",
        }
    }

    /// Chain parameter expected by the balance-data provider
    #[must_use]
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Ethereum => "eth",
            Self::Arbitrum => "arbitrum",
            Self::Polygon => "polygon",
            Self::BinanceSmartChain => "bsc",
            Self::Fantom => "fantom",
            Self::Avalanche => "avalanche",
            Self::Cronos => "cronos",
        }
    }

    /// Static metadata for this chain, if the table has an entry
    #[must_use]
    pub fn metadata(self) -> Option<&'static ChainMetadata> {
        CHAIN_METADATA.get(&self)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Native asset and explorer checker information for a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainMetadata {
    pub native_symbol: &'static str,
    pub native_name: &'static str,
    pub native_checker_url: &'static str,
    pub token_checker_url: &'static str,
}

// Arbitrum pays gas in ETH, so it shares Ethereum's symbol and name.
static CHAIN_METADATA: Lazy<HashMap<Chain, ChainMetadata>> = Lazy::new(|| {
    HashMap::from([
        (
            Chain::Ethereum,
            ChainMetadata {
                native_symbol: "ETH",
                native_name: "Ethereum",
                native_checker_url: "https://etherscan.io/balancecheck-tool",
                token_checker_url: "https://etherscan.io/tokencheck-tool",
            },
        ),
        (
            Chain::Arbitrum,
            ChainMetadata {
                native_symbol: "ETH",
                native_name: "Ethereum",
                native_checker_url: "https://arbiscan.io/balancecheck-tool",
                token_checker_url: "https://arbiscan.io/tokencheck-tool",
            },
        ),
        (
            Chain::Polygon,
            ChainMetadata {
                native_symbol: "MATIC",
                native_name: "Polygon (MATIC)",
                native_checker_url: "https://polygonscan.com/balancecheck-tool",
                token_checker_url: "https://polygonscan.com/tokencheck-tool",
            },
        ),
        (
            Chain::BinanceSmartChain,
            ChainMetadata {
                native_symbol: "BNB",
                native_name: "Binance Coin",
                native_checker_url: "https://bscscan.com/balancecheck-tool",
                token_checker_url: "https://bscscan.com/tokencheck-tool",
            },
        ),
        (
            Chain::Fantom,
            ChainMetadata {
                native_symbol: "FTM",
                native_name: "Fantom",
                native_checker_url: "https://ftmscan.com/balancecheck-tool",
                token_checker_url: "https://ftmscan.com/tokencheck-tool",
            },
        ),
        (
            Chain::Avalanche,
            ChainMetadata {
                native_symbol: "AVAX",
                native_name: "Avalanche",
                native_checker_url: "https://snowtrace.io/balancecheck-tool",
                token_checker_url: "https://snowtrace.io/tokencheck-tool",
            },
        ),
        (
            Chain::Cronos,
            ChainMetadata {
                native_symbol: "CRO",
                native_name: "Cronos",
                native_checker_url: "https://cronoscan.com/balancecheck-tool",
                token_checker_url: "https://cronoscan.com/tokencheck-tool",
            },
        ),
    ])
});
