//! Common test utilities for e2e tests
//!
//! Provides request and provider fixtures shared by the integration tests.

#![allow(dead_code)]

use chain_resolver::application::use_cases::ProviderBalances;
use chain_resolver::domain::models::balance::{BalanceRequest, NativeBalance, TokenBalance};

/// Address used across fixtures
pub const TEST_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f1dEaD";

/// Every alias accepted by the resolver, grouped by canonical name
pub const ALIAS_GROUPS: &[(&str, &[&str])] = &[
    ("ethereum", &["eth", "ethereum", "Ethereum", "ETH", "Eth"]),
    ("polygon", &["polygon", "matic", "Polygon", "MATIC", "Matic"]),
    ("arbitrum", &["arbitrum", "Arbitrum", "arb"]),
    (
        "binance-smart-chain",
        &["bsc", "binance", "binance smart chain", "bnb chain", "bnb", "BNB", "Binance Smart Chain", "BSC"],
    ),
    ("fantom", &["ftm", "fantom", "FTM", "Fantom"]),
    ("cronos", &["cro", "CRO", "cronos", "Cronos"]),
    ("avalanche", &["avax", "avalanche", "AVAX"]),
];

/// Build a balance request for the given chain name
pub fn request(chain: &str) -> BalanceRequest {
    BalanceRequest {
        address: TEST_ADDRESS.to_string(),
        chain: chain.to_string(),
        date: "2024-03-01".to_string(),
        timestamp: "1709251200".to_string(),
    }
}

/// Build a provider token balance
pub fn token(symbol: &str, balance: &str, possible_spam: bool) -> TokenBalance {
    TokenBalance {
        token_address: format!("0x{:0>40}", symbol.to_lowercase()),
        name: format!("{symbol} Token"),
        symbol: symbol.to_string(),
        logo: None,
        thumbnail: None,
        decimals: 18,
        balance: balance.to_string(),
        possible_spam,
    }
}

/// Build provider balances with a native amount and tokens
pub fn balances(native: &str, tokens: Vec<TokenBalance>) -> ProviderBalances {
    ProviderBalances {
        block_number: 19_340_000,
        native: NativeBalance {
            balance: native.to_string(),
        },
        tokens,
    }
}
