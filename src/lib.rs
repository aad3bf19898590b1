//! Chain Resolver
//!
//! Normalizes blockchain network identifiers and derives the per-chain
//! metadata used to enrich balance lookup responses, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
