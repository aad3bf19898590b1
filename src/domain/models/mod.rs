//! Domain Models
//!
//! Supported chains and the balance records built around them.

pub mod balance;
pub mod chain;

pub use balance::{BalanceRequest, BalanceResponse, Erc20TokenResponse, NativeBalance, TokenBalance};
pub use chain::{Chain, ChainMetadata};
