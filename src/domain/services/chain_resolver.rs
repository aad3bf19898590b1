//! Chain Resolver
//!
//! Normalizes free-form chain names and looks up per-chain native asset and
//! checker URL metadata.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::domain::models::chain::{Chain, ChainMetadata};
use crate::shared::errors::ChainError;

/// Lowercase alias to canonical chain
static CHAIN_ALIASES: Lazy<HashMap<&'static str, Chain>> = Lazy::new(|| {
    [
        ("eth", Chain::Ethereum),
        ("ethereum", Chain::Ethereum),
        ("polygon", Chain::Polygon),
        ("matic", Chain::Polygon),
        ("arbitrum", Chain::Arbitrum),
        ("arb", Chain::Arbitrum),
        ("bsc", Chain::BinanceSmartChain),
        ("binance", Chain::BinanceSmartChain),
        ("binance smart chain", Chain::BinanceSmartChain),
        ("bnb chain", Chain::BinanceSmartChain),
        ("bnb", Chain::BinanceSmartChain),
        ("ftm", Chain::Fantom),
        ("fantom", Chain::Fantom),
        ("cro", Chain::Cronos),
        ("cronos", Chain::Cronos),
        ("avax", Chain::Avalanche),
        ("avalanche", Chain::Avalanche),
    ]
    .into_iter()
    .collect()
});

/// Native asset details of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeInfo {
    pub symbol: &'static str,
    pub checker_url: &'static str,
    pub display_name: &'static str,
}

/// Normalize a chain name into its canonical identifier.
///
/// Matching is ASCII case-insensitive but otherwise exact; surrounding
/// whitespace is not stripped.
///
/// # Errors
///
/// Returns `ChainError::UnsupportedChain` if `input` matches no known alias.
pub fn normalize(input: &str) -> Result<Chain, ChainError> {
    CHAIN_ALIASES
        .get(input.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| ChainError::UnsupportedChain {
            input: input.to_string(),
        })
}

/// Resolve the native asset symbol, balance checker URL and display name.
///
/// # Errors
///
/// Returns `ChainError::UnsupportedChain` if the chain cannot be normalized.
/// Returns `ChainError::UnresolvableNative` if the chain has no metadata.
pub fn resolve_native_info(chain: &str) -> Result<NativeInfo, ChainError> {
    native_info(normalize(chain)?)
}

/// Resolve the ERC20 token checker URL.
///
/// # Errors
///
/// Returns `ChainError::UnsupportedChain` if the chain cannot be normalized.
/// Returns `ChainError::UnresolvableTokenChecker` if the chain has no metadata.
pub fn resolve_token_checker_url(chain: &str) -> Result<&'static str, ChainError> {
    token_checker_url(normalize(chain)?)
}

/// Native asset details of an already normalized chain
///
/// # Errors
///
/// Returns `ChainError::UnresolvableNative` if the chain has no metadata.
pub fn native_info(chain: Chain) -> Result<NativeInfo, ChainError> {
    native_info_with(chain, Chain::metadata)
}

/// ERC20 token checker URL of an already normalized chain
///
/// # Errors
///
/// Returns `ChainError::UnresolvableTokenChecker` if the chain has no metadata.
pub fn token_checker_url(chain: Chain) -> Result<&'static str, ChainError> {
    token_checker_url_with(chain, Chain::metadata)
}

fn native_info_with<F>(chain: Chain, lookup: F) -> Result<NativeInfo, ChainError>
where
    F: FnOnce(Chain) -> Option<&'static ChainMetadata>,
{
    let meta = lookup(chain).ok_or(ChainError::UnresolvableNative(chain))?;

    Ok(NativeInfo {
        symbol: meta.native_symbol,
        checker_url: meta.native_checker_url,
        display_name: meta.native_name,
    })
}

fn token_checker_url_with<F>(chain: Chain, lookup: F) -> Result<&'static str, ChainError>
where
    F: FnOnce(Chain) -> Option<&'static ChainMetadata>,
{
    lookup(chain)
        .map(|meta| meta.token_checker_url)
        .ok_or(ChainError::UnresolvableTokenChecker(chain))
}

impl FromStr for Chain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}
