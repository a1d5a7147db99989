// crates/tourdb-core/src/error.rs

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourDbError>;

/// Errors that can occur while loading or serializing the database.
///
/// Queries themselves never fail: an unknown place or missing attribute is
/// reported through the [`crate::NOT_AVAILABLE`] sentinel instead.
#[derive(Debug, Error)]
pub enum TourDbError {
    /// The dataset file could not be located.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source CSV could not be parsed.
    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The binary cache could not be read or written.
    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
