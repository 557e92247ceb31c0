//! Error types for the provider crate.

use thiserror::Error;

/// Errors returned by a data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The operation is part of the contract but has no implementation.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },

    /// A list request could not be decoded.
    #[error("invalid list request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// The record store could not be decoded.
    #[error("invalid record store: {0}")]
    InvalidRecords(#[source] serde_json::Error),

    /// The record store decoded, but is not a JSON array.
    #[error("record store must be a JSON array, got {found}")]
    RecordsNotArray { found: &'static str },

    /// The provider configuration could not be decoded.
    #[error("invalid provider config: {0}")]
    InvalidConfig(#[from] serde_yaml::Error),
}

impl ProviderError {
    /// Returns `true` for [`ProviderError::NotImplemented`].
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, ProviderError::NotImplemented { .. })
    }
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
