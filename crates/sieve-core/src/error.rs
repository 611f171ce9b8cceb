//! Error types

use thiserror::Error;

/// Errors surfaced at engine construction and at the JSON boundary.
///
/// Searching itself never fails; abnormal searches produce no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Exclusion pattern is not a valid regular expression
    #[error("invalid exclusion pattern '{pattern}': {reason}")]
    InvalidExclusion { pattern: String, reason: String },

    /// Source is neither a sequence nor a mapping of strings
    #[error("unsupported source shape: expected an array or object of strings, found {0}")]
    UnsupportedSource(String),

    /// Malformed JSON input
    #[error("invalid search input: {0}")]
    InvalidInput(String),
}

/// Result type for sieve operations
pub type Result<T> = std::result::Result<T, SearchError>;
