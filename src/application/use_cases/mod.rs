//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod balances;
pub mod chains;

pub use balances::{BuildBalanceResponseUseCase, ProviderBalances};
pub use chains::{ChainInfo, ResolveChainInfoUseCase};
