//! Resolve Chain Info Use Case
//!
//! Resolves everything the API knows about a chain from a free-form name.

use crate::domain::models::chain::Chain;
use crate::domain::services::chain_resolver;
use crate::shared::errors::UseCaseError;

/// Chain-derived fields of a balance response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub chain: Chain,
    pub provider_chain: &'static str,
    pub native_symbol: &'static str,
    pub native_name: &'static str,
    pub native_checker_url: &'static str,
    pub token_checker_url: &'static str,
}

/// Use case for resolving a chain name into its canonical info
#[derive(Debug, Default, Clone, Copy)]
pub struct ResolveChainInfoUseCase;

impl ResolveChainInfoUseCase {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Chain` if the chain is unsupported or lacks metadata.
    pub fn execute(&self, chain: &str) -> Result<ChainInfo, UseCaseError> {
        tracing::debug!(input = chain, "Resolving chain info");

        let canonical = chain_resolver::normalize(chain).inspect_err(|_| {
            tracing::warn!(input = chain, "Unsupported chain requested");
        })?;
        let native = chain_resolver::native_info(canonical)?;
        let token_checker_url = chain_resolver::token_checker_url(canonical)?;

        tracing::debug!(chain = %canonical, "Chain info resolved");
        Ok(ChainInfo {
            chain: canonical,
            provider_chain: canonical.provider_id(),
            native_symbol: native.symbol,
            native_name: native.display_name,
            native_checker_url: native.checker_url,
            token_checker_url,
        })
    }
}
