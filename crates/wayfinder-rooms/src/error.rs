//! Error types for wayfinder-rooms.

use crate::id::RoomId;
use thiserror::Error;

/// Result type for room directory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a room directory.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An identifier that cannot name a room
    #[error("invalid room identifier: {0:?}")]
    InvalidRoom(String),

    /// Two rooms answer to the same name
    #[error("name {name:?} claimed by both {first} and {second}")]
    DuplicateName {
        name: String,
        first: RoomId,
        second: RoomId,
    },
}
