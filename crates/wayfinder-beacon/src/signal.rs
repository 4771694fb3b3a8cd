//! Beacon identifiers and signal reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier broadcast by a fixed-location beacon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeaconId(String);

impl BeaconId {
    /// Create a beacon identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as broadcast.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BeaconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BeaconId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BeaconId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single signal report from the scanning subsystem.
///
/// Ephemeral: only the derived closest beacon outlives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconSignal {
    /// Which beacon was heard
    pub beacon_id: BeaconId,

    /// Received signal strength in dBm (closer to zero is stronger)
    pub rssi: i16,

    /// When the report was produced (ms since epoch)
    pub timestamp_ms: u64,
}

impl BeaconSignal {
    /// Create a report stamped with the current time.
    pub fn new(beacon_id: impl Into<BeaconId>, rssi: i16) -> Self {
        Self::with_timestamp(beacon_id, rssi, now_ms())
    }

    /// Create a report with an explicit timestamp.
    pub fn with_timestamp(beacon_id: impl Into<BeaconId>, rssi: i16, timestamp_ms: u64) -> Self {
        Self {
            beacon_id: beacon_id.into(),
            rssi,
            timestamp_ms,
        }
    }
}

/// The tracker's verdict on where the user is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "beacon", rename_all = "snake_case")]
pub enum Closest {
    /// Scanning has not been authorized
    #[default]
    Unknown,
    /// Authorized, but no beacon has been heard
    None,
    /// The strongest beacon currently known
    Beacon(BeaconId),
}

impl Closest {
    /// The beacon, if one is known.
    pub fn beacon(&self) -> Option<&BeaconId> {
        match self {
            Closest::Beacon(id) => Some(id),
            Closest::Unknown | Closest::None => None,
        }
    }

    /// True when no beacon can be used as a starting point.
    pub fn is_absent(&self) -> bool {
        self.beacon().is_none()
    }
}

impl fmt::Display for Closest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Closest::Unknown => write!(f, "unknown"),
            Closest::None => write!(f, "none"),
            Closest::Beacon(id) => write!(f, "{}", id),
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
