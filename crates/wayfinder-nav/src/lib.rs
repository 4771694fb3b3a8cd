//! Wayfinder Navigation
//!
//! Reconciles what the user typed, what the beacons say and which screen is
//! showing into one decision: what the user should see and do next.
//!
//! # Architecture
//!
//! - **State**: The explicitly-owned [`NavigationState`] store. Every field
//!   changes only through its named operations.
//! - **Engine**: The [`DecisionEngine`] runs the Go and Start Over intents
//!   against the store and yields at most one [`AdvisoryOutcome`].
//! - **Session**: The UI-facing surface. Holds the pending text, the current
//!   advisory and the read handle on the closest beacon, and answers the
//!   clarification dialogs.
//!
//! # Go
//!
//! ```text
//! resolve text ──not found──► InvalidDestination
//!      │
//!  BATHROOM, not clarified ──► BathroomClarificationNeeded
//!      │
//!  commit destination
//!      │
//!  no beacon, no origin ─────► NoStartDetected
//!      │
//!  floor not confirmed ──────► FloorClarificationNeeded
//!      │
//!  None (ready to navigate)
//! ```
//!
//! The last two checks read the *stored* destination, so a Go press after a
//! clarification dialog picks up where the previous one stopped.

mod advisory;
mod engine;
mod error;
mod session;
mod state;

pub use advisory::AdvisoryOutcome;
pub use engine::DecisionEngine;
pub use error::{Blocked, Result};
pub use session::{RouteRequest, Session, SessionSnapshot, Start};
pub use state::{NavigationState, Phase, UiMode};

pub use wayfinder_beacon::{BeaconId, Closest};
pub use wayfinder_rooms::{RoomId, RoomMatch};
