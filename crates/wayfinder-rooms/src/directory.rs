//! The room directory.

use crate::error::{Error, Result};
use crate::id::{normalize, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const BUNDLED: &str = include_str!("../data/campus.json");

/// Source of room identifiers for normalized names.
///
/// Returns the raw identifier the directory holds. The resolver validates
/// it before handing it out.
pub trait RoomLookup {
    fn lookup(&self, normalized: &str) -> Option<&str>;
}

/// A room as listed in a directory file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomEntry {
    /// Canonical identifier
    pub id: String,

    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Other names users type for this room
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl RoomEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct DirectoryFile {
    rooms: Vec<RoomEntry>,
}

/// In-memory directory keyed by normalized name.
#[derive(Debug, Clone, Default)]
pub struct RoomDirectory {
    names: HashMap<String, RoomId>,
    rooms: usize,
}

impl RoomDirectory {
    /// Build a directory from entries.
    ///
    /// Every entry answers to its normalized id, name and aliases.
    pub fn from_entries(entries: impl IntoIterator<Item = RoomEntry>) -> Result<Self> {
        let mut directory = Self::default();

        for entry in entries {
            let id = RoomId::parse(&normalize(&entry.id))?;
            let keys = std::iter::once(entry.id.as_str())
                .chain(entry.name.as_deref())
                .chain(entry.aliases.iter().map(String::as_str));

            for key in keys {
                let key = normalize(key);
                if key.is_empty() {
                    continue;
                }
                match directory.names.get(&key) {
                    Some(existing) if *existing != id => {
                        return Err(Error::DuplicateName {
                            name: key,
                            first: existing.clone(),
                            second: id,
                        });
                    }
                    Some(_) => {}
                    None => {
                        directory.names.insert(key, id.clone());
                    }
                }
            }
            directory.rooms += 1;
        }

        debug!(
            rooms = directory.rooms,
            names = directory.names.len(),
            "room directory built"
        );
        Ok(directory)
    }

    /// Parse a directory from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DirectoryFile = serde_json::from_str(json)?;
        Self::from_entries(file.rooms)
    }

    /// Load a directory file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The directory bundled with the kiosk.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    /// Number of rooms listed.
    pub fn len(&self) -> usize {
        self.rooms
    }

    /// Check if no room is listed.
    pub fn is_empty(&self) -> bool {
        self.rooms == 0
    }

    /// Whether a normalized name is listed.
    pub fn contains(&self, normalized: &str) -> bool {
        self.names.contains_key(normalized)
    }
}

impl RoomLookup for RoomDirectory {
    fn lookup(&self, normalized: &str) -> Option<&str> {
        self.names.get(normalized).map(RoomId::as_str)
    }
}
