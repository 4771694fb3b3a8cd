//! Canonical room identifiers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The generic bathroom destination.
pub const BATHROOM: &str = "BATHROOM";

/// Normalize user text for lookup: trim and upper-case.
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// A canonical room identifier.
///
/// Upper-case ASCII letters, digits, `-` and `_`; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Validate an identifier.
    pub fn parse(raw: &str) -> Result<Self> {
        let well_formed = !raw.is_empty()
            && raw
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if well_formed {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::InvalidRoom(raw.to_string()))
        }
    }

    /// The generic bathroom destination.
    pub fn bathroom() -> Self {
        Self(BATHROOM.to_string())
    }

    /// Whether this is the generic bathroom destination.
    pub fn is_bathroom(&self) -> bool {
        self.0 == BATHROOM
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoomId {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}
