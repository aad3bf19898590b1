//! Balance Use Cases
//!
//! Assembly of balance lookup responses.

mod build_balance_response;

pub use build_balance_response::{BuildBalanceResponseUseCase, ProviderBalances, NATIVE_DECIMALS};
