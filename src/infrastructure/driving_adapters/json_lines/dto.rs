//! JSON Lines DTOs
//!
//! Output records written for each processed input line.

use serde::Serialize;

use crate::application::use_cases::chains::ChainInfo;
use crate::shared::errors::ErrorResponse;

/// Chain-derived response fields for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainInfoDto {
    pub account_address: String,
    pub chain: String,
    pub provider_chain: String,
    pub native_asset: String,
    pub native_asset_name: String,
    pub native_checker_url: String,
    pub erc20_token_checker_url: String,
}

impl ChainInfoDto {
    #[must_use]
    pub fn new(address: impl Into<String>, info: &ChainInfo) -> Self {
        Self {
            account_address: address.into(),
            chain: info.chain.to_string(),
            provider_chain: info.provider_chain.to_string(),
            native_asset: info.native_symbol.to_string(),
            native_asset_name: info.native_name.to_string(),
            native_checker_url: info.native_checker_url.to_string(),
            erc20_token_checker_url: info.token_checker_url.to_string(),
        }
    }
}

/// One output line: either resolved info or an error body
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LineOutput {
    Resolved(ChainInfoDto),
    Failed(ErrorResponse),
}
