//! Wayfinder Rooms
//!
//! Maps free-text destinations to canonical room identifiers.
//!
//! # Design
//!
//! Input is normalized (trimmed, upper-cased) and looked up in a room
//! directory. The directory is an external collaborator behind the
//! [`RoomLookup`] trait; [`RoomDirectory`] is the JSON-backed
//! implementation shipped with the kiosk.
//!
//! `BATHROOM` always resolves. Bathrooms are not listed individually, a
//! follow-up clarification picks one.
//!
//! # Example
//!
//! ```
//! use wayfinder_rooms::{RoomDirectory, RoomMatch, RoomResolver};
//!
//! let resolver = RoomResolver::new(RoomDirectory::bundled().unwrap());
//! assert_eq!(resolver.resolve("  library "), resolver.resolve("LIBRARY"));
//! assert_eq!(resolver.resolve("nowhere"), RoomMatch::NotFound);
//! ```

mod directory;
mod error;
mod id;
mod resolver;

pub use directory::{RoomDirectory, RoomEntry, RoomLookup};
pub use error::{Error, Result};
pub use id::{normalize, RoomId, BATHROOM};
pub use resolver::{RoomMatch, RoomResolver};
