// crates/placesdb-core/src/error.rs
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PlacesError>;

/// Errors raised while building a [`crate::PlacesIndex`].
///
/// Lookups never fail; only loading and parsing the places file can.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The places file could not be opened.
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not follow the fixed-width layout.
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    /// The record-count hint could not be reserved up front.
    #[error("cannot reserve room for {hint} records")]
    Capacity { hint: usize },

    /// A latitude or longitude column is not a number.
    #[error("line {line}: invalid coordinate {value:?}")]
    InvalidCoordinate { line: usize, value: String },

    /// A built trie violates its structural invariants.
    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
