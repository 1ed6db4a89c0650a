//! Error types for wavedial
//!
//! One application-level error enum; components propagate with `?` except at
//! the search boundary, where failures are deliberately converted to an
//! empty result page (see `search::StationSearch`).

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("Station '{0}' is not in the favorites")]
    NotFavorited(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Playback error: {0}")]
    Playback(String),
}

/// Result type alias for wavedial
pub type Result<T> = std::result::Result<T, AppError>;
