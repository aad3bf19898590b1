//! Driven Adapters
//!
//! Implementations for external systems the application depends on:
//! - Configuration

pub mod config;

pub use config::AppConfig;
