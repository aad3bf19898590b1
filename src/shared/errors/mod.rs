//! Error Types
//!
//! Chain resolution and use case errors with stable error codes.

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::chain::Chain;

/// Message shown to callers when a chain name is not recognized
pub const SUPPORTED_CHAINS_HINT: &str = "did you make a typo? if not, then that blockchain is not supported. \
please use one of the supported chains: ethereum, arbitrum, polygon, binance smart chain, fantom, avalanche, cronos";

/// Chain resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("unsupported chain '{input}': {hint}", hint = SUPPORTED_CHAINS_HINT)]
    UnsupportedChain { input: String },

    #[error("native information cannot be determined for {0}")]
    UnresolvableNative(Chain),

    #[error("erc20 token checker url cannot be determined for {0}")]
    UnresolvableTokenChecker(Chain),
}

impl ChainError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedChain { .. } => "UNSUPPORTED_CHAIN",
            Self::UnresolvableNative(_) => "UNRESOLVABLE_NATIVE",
            Self::UnresolvableTokenChecker(_) => "UNRESOLVABLE_TOKEN_CHECKER",
        }
    }

    /// Whether the caller supplied bad input (maps to a 4xx at the HTTP edge)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnsupportedChain { .. })
    }
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("invalid balance '{value}': {reason}")]
    InvalidBalance { value: String, reason: String },
}

impl UseCaseError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Chain(err) => err.error_code(),
            Self::InvalidBalance { .. } => "INVALID_BALANCE",
        }
    }
}

/// Error body written by the driving adapters
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl From<&UseCaseError> for ErrorResponse {
    fn from(err: &UseCaseError) -> Self {
        Self::new(err.error_code(), err.to_string())
    }
}
