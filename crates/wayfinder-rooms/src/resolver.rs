//! Destination text resolution.

use crate::directory::RoomLookup;
use crate::id::{normalize, RoomId, BATHROOM};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Outcome of resolving destination text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "room", rename_all = "snake_case")]
pub enum RoomMatch {
    Found(RoomId),
    NotFound,
}

impl RoomMatch {
    pub fn room(&self) -> Option<&RoomId> {
        match self {
            RoomMatch::Found(id) => Some(id),
            RoomMatch::NotFound => None,
        }
    }

    pub fn into_room(self) -> Option<RoomId> {
        match self {
            RoomMatch::Found(id) => Some(id),
            RoomMatch::NotFound => None,
        }
    }
}

/// Pure lookup of destination text against a directory.
#[derive(Debug, Clone)]
pub struct RoomResolver<L> {
    directory: L,
}

impl<L: RoomLookup> RoomResolver<L> {
    pub fn new(directory: L) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &L {
        &self.directory
    }

    /// Resolve free text to a room.
    ///
    /// An identifier the directory hands back that does not validate is
    /// treated as not found.
    pub fn resolve(&self, text: &str) -> RoomMatch {
        let normalized = normalize(text);
        if normalized == BATHROOM {
            return RoomMatch::Found(RoomId::bathroom());
        }

        let Some(raw) = self.directory.lookup(&normalized) else {
            trace!(text = %normalized, "no room matches");
            return RoomMatch::NotFound;
        };

        match RoomId::parse(raw) {
            Ok(id) => RoomMatch::Found(id),
            Err(e) => {
                warn!(text = %normalized, "directory returned {}", e);
                RoomMatch::NotFound
            }
        }
    }
}
