//! Domain Services
//!
//! Stateless domain logic over the fixed chain set.

pub mod chain_resolver;

pub use chain_resolver::{
    native_info, normalize, resolve_native_info, resolve_token_checker_url, token_checker_url, NativeInfo,
};
