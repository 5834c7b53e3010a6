//! Error types for rekishi operations.

use thiserror::Error;

/// Errors that can occur while loading study data or persisting review state.
///
/// Only failures that end a view surface here. A malformed review record or a
/// missing optional field is recovered where it is read and never becomes an
/// `Error`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The study data could not be fetched or decoded.
    #[error("Failed to load study data: {0}")]
    Load(String),

    /// The review record could not be written.
    #[error("Review store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;
