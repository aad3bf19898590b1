//! Build Balance Response Use Case
//!
//! Assembles the client response from a request and the balances reported
//! by the balance-data provider.

use rust_decimal::Decimal;

use crate::application::use_cases::chains::{ChainInfo, ResolveChainInfoUseCase};
use crate::domain::models::balance::{
    BalanceRequest, BalanceResponse, Erc20TokenResponse, NativeBalance, TokenBalance,
};
use crate::shared::errors::UseCaseError;

/// Decimals of every supported chain's native asset
pub const NATIVE_DECIMALS: u32 = 18;

/// Balances fetched from the provider for one address at one block
#[derive(Debug, Clone)]
pub struct ProviderBalances {
    pub block_number: u64,
    pub native: NativeBalance,
    pub tokens: Vec<TokenBalance>,
}

/// Use case for building a balance response
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildBalanceResponseUseCase {
    resolve_chain_info: ResolveChainInfoUseCase,
}

impl BuildBalanceResponseUseCase {
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolve_chain_info: ResolveChainInfoUseCase::new(),
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Chain` if the request chain cannot be resolved.
    /// Returns `UseCaseError::InvalidBalance` if the native balance is not a
    /// representable integer amount.
    pub fn execute(
        &self,
        request: &BalanceRequest,
        balances: ProviderBalances,
    ) -> Result<BalanceResponse, UseCaseError> {
        let info = self.resolve_chain_info.execute(&request.chain)?;
        let native_balance = native_units(&balances.native.balance)?;
        let balance = f64::try_from(native_balance).map_err(|err| UseCaseError::InvalidBalance {
            value: balances.native.balance.clone(),
            reason: err.to_string(),
        })?;

        let erc20_tokens: Vec<Erc20TokenResponse> = balances
            .tokens
            .into_iter()
            .map(|token| token_response(token, &info))
            .collect();

        tracing::info!(
            address = %request.address,
            chain = %info.chain,
            block_number = balances.block_number,
            tokens = erc20_tokens.len(),
            "Balance response assembled"
        );

        Ok(BalanceResponse {
            address: request.address.clone(),
            chain: info.chain.to_string(),
            block_number: balances.block_number,
            asset: info.native_symbol.to_string(),
            asset_name: info.native_name.to_string(),
            native_checker_url: info.native_checker_url.to_string(),
            balance,
            erc20_tokens,
        })
    }
}

/// Convert a smallest-unit integer string into whole native units
fn native_units(raw: &str) -> Result<Decimal, UseCaseError> {
    let invalid = |reason: String| UseCaseError::InvalidBalance {
        value: raw.to_string(),
        reason,
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("expected a base-10 integer".to_string()));
    }

    let mut value = Decimal::from_str_exact(raw).map_err(|err| invalid(err.to_string()))?;
    value
        .set_scale(NATIVE_DECIMALS)
        .map_err(|err| invalid(err.to_string()))?;
    Ok(value.normalize())
}

fn token_response(token: TokenBalance, info: &ChainInfo) -> Erc20TokenResponse {
    Erc20TokenResponse {
        name: token.name,
        symbol: token.symbol,
        contract_address: token.token_address,
        balance: token.balance,
        checker_url: info.token_checker_url.to_string(),
        possible_spam: token.possible_spam,
    }
}
