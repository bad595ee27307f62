//! Common error types.

use thiserror::Error;

/// Errors produced while building or parsing snapshot types.
#[derive(Debug, Error)]
pub enum Error {
    /// An identifier was empty.
    #[error("invalid {kind} id: {value:?}")]
    InvalidId { kind: &'static str, value: String },

    /// A snapshot could not be decoded.
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias using the common [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
