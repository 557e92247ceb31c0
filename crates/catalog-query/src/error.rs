//! Error types for the query crate.

use thiserror::Error;

/// Errors surfaced while executing a query.
///
/// Filters, sorters and pagination never fail: malformed input degrades to a
/// permissive default. The only failure is a field accessor that cannot
/// produce a value, which fallible accessors report through this type (or
/// through their own error type, see [`Query::try_execute`](crate::Query::try_execute)).
#[derive(Debug, Error)]
pub enum QueryError {
    /// A fallible accessor could not read a field.
    #[error("failed to read field '{field}': {message}")]
    Accessor { field: String, message: String },
}

impl QueryError {
    /// Creates an accessor error for the given field.
    pub fn accessor(field: impl Into<String>, message: impl Into<String>) -> Self {
        QueryError::Accessor {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
