//! Error types for the crate.
//!
//! The carousel and chrome state machines never fail at runtime; errors only
//! come from loading data (project feed, settings) and from setup.

use thiserror::Error;

/// Errors that can occur while loading data or setting up components
#[derive(Error, Debug)]
pub enum ShowreelError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A carousel needs at least one item to loop over
    #[error("Carousel track has no items")]
    EmptyTrack,

    /// Settings parsed but hold unusable values
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// File watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for fallible operations
pub type ShowreelResult<T> = Result<T, ShowreelError>;
