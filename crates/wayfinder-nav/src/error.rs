//! Reasons the user cannot start navigating yet.

use thiserror::Error;

/// Result type for navigation operations.
pub type Result<T> = std::result::Result<T, Blocked>;

/// A user-recoverable reason navigation cannot begin.
///
/// None of these are faults. Each maps to one blocking dialog and clears
/// once the user answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Blocked {
    /// The destination text names no known room
    #[error("destination not found")]
    InvalidDestination,

    /// No beacon heard and no landmark reported
    #[error("starting point unknown")]
    NoOriginAvailable,

    /// The user's current floor has not been confirmed
    #[error("current floor not confirmed")]
    FloorNotConfirmed,

    /// The user has not picked which bathroom
    #[error("bathroom not chosen")]
    BathroomNotDisambiguated,
}
