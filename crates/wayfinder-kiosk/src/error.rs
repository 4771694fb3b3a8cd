//! Error types for the kiosk host.

use thiserror::Error;

/// Result type for kiosk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can stop the kiosk.
#[derive(Debug, Error)]
pub enum Error {
    /// Room directory could not be loaded
    #[error("Room directory error: {0}")]
    Rooms(#[from] wayfinder_rooms::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad environment configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The beacon tracker task is gone
    #[error("beacon tracker has stopped")]
    ScannerClosed,
}
