//! Best-signal bookkeeping.
//!
//! The tracker keeps the latest reading per beacon and answers "which is
//! strongest" on demand. Readings never expire: a beacon is re-ranked only
//! when it reports again, and one that goes silent keeps its last reading
//! until permission is revoked.

use crate::signal::{BeaconId, BeaconSignal, Closest};
use std::collections::HashMap;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
struct Reading {
    rssi: i16,
    /// Observation order, used to break rssi ties toward the newest report.
    seq: u64,
    timestamp_ms: u64,
}

/// Reduces beacon reports to the closest beacon.
#[derive(Debug, Default)]
pub struct ProximityTracker {
    authorized: bool,
    readings: HashMap<BeaconId, Reading>,
    seq: u64,
}

impl ProximityTracker {
    /// Create a tracker. Scanning starts unauthorized.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the scanning permission has been granted.
    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// Apply the outcome of the permission prompt.
    ///
    /// Revoking permission drops every reading; the verdict returns to
    /// [`Closest::Unknown`].
    pub fn set_authorized(&mut self, granted: bool) {
        self.authorized = granted;
        if !granted {
            self.readings.clear();
        }
    }

    /// Record a signal report. Ignored while unauthorized.
    pub fn observe(&mut self, signal: BeaconSignal) {
        if !self.authorized {
            trace!(beacon = %signal.beacon_id, "ignoring signal while unauthorized");
            return;
        }

        self.seq += 1;
        self.readings.insert(
            signal.beacon_id,
            Reading {
                rssi: signal.rssi,
                seq: self.seq,
                timestamp_ms: signal.timestamp_ms,
            },
        );
    }

    /// The strongest known beacon.
    ///
    /// Equal strengths go to the most recently observed beacon. A beacon
    /// that stopped reporting still competes with its last reading.
    pub fn closest(&self) -> Closest {
        if !self.authorized {
            return Closest::Unknown;
        }

        self.readings
            .iter()
            .max_by_key(|(_, r)| (r.rssi, r.seq))
            .map(|(id, _)| Closest::Beacon(id.clone()))
            .unwrap_or(Closest::None)
    }

    /// Timestamp of the latest report from a beacon.
    pub fn last_seen(&self, id: &BeaconId) -> Option<u64> {
        self.readings.get(id).map(|r| r.timestamp_ms)
    }

    /// Number of beacons currently heard.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if no beacon has been heard.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
