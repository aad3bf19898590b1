//! Domain Layer
//!
//! Contains the supported chain set, its static metadata, the resolver and
//! the balance records. This layer has no dependencies on infrastructure.

pub mod models;
pub mod services;

pub use models::chain::{Chain, ChainMetadata};
pub use services::chain_resolver::{normalize, resolve_native_info, resolve_token_checker_url, NativeInfo};
