//! Application Layer
//!
//! Contains use cases that combine the chain resolver with provider data.

pub mod use_cases;
