//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (input drivers) and
//! driven adapters (configuration).

pub mod driven_adapters;
pub mod driving_adapters;
