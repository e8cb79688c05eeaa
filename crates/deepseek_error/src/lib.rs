//! Error types for the DeepSeek client library.
//!
//! This crate provides the foundation error types used throughout the
//! DeepSeek workspace. Request-cycle failures live in [`ClientError`],
//! construction-time failures in [`ConfigError`], and [`DeepseekError`]
//! aggregates both for callers that want a single error type.

mod client;
mod config;

pub use client::{ClientError, ClientErrorKind, ClientResult};
pub use config::ConfigError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum DeepseekErrorKind {
    /// Request-cycle error
    Client(ClientError),
    /// Configuration error
    Config(ConfigError),
}

impl std::fmt::Display for DeepseekErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeepseekErrorKind::Client(e) => write!(f, "{}", e),
            DeepseekErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DeepseekErrorKind {}

/// DeepSeek error with kind discrimination.
#[derive(Debug)]
pub struct DeepseekError(Box<DeepseekErrorKind>);

impl DeepseekError {
    /// Create a new error from a kind.
    pub fn new(kind: DeepseekErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DeepseekErrorKind {
        &self.0
    }
}

impl std::fmt::Display for DeepseekError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DeepSeek Error: {}", self.0)
    }
}

impl std::error::Error for DeepseekError {}

// Generic From implementation for any type that converts to DeepseekErrorKind
impl<T> From<T> for DeepseekError
where
    T: Into<DeepseekErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for DeepSeek operations.
pub type DeepseekResult<T> = std::result::Result<T, DeepseekError>;
