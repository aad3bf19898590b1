//! Chain Use Cases
//!
//! Resolution of free-form chain names.

mod resolve_chain_info;

pub use resolve_chain_info::{ChainInfo, ResolveChainInfoUseCase};
