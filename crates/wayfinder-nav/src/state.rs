//! The navigation state store.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wayfinder_beacon::Closest;
use wayfinder_rooms::RoomId;

/// Which screen the presentation layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// Home screen with destination entry
    Home,
    /// Map with the route overlay
    Map,
}

/// Where the user is in the Go flow. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No destination, home screen
    Idle,
    /// Text typed, not yet committed
    DestinationEntered,
    /// Destination set, no starting point known
    OriginPending,
    /// Starting point known, floor not confirmed
    FloorPending,
    /// Cleared to navigate, map not yet shown
    Ready,
    /// Map visible
    Navigating,
}

/// Session-wide navigation state.
///
/// One instance per app session, owned by whoever drives the intents.
/// `map_visible` implies a destination is set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    destination: Option<RoomId>,
    origin: Option<RoomId>,
    map_visible: bool,
    floor_set: bool,
    bathroom_set: bool,
    closest_beacon: Closest,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(&self) -> Option<&RoomId> {
        self.destination.as_ref()
    }

    pub fn origin(&self) -> Option<&RoomId> {
        self.origin.as_ref()
    }

    pub fn is_map_visible(&self) -> bool {
        self.map_visible
    }

    pub fn is_floor_set(&self) -> bool {
        self.floor_set
    }

    pub fn is_bathroom_set(&self) -> bool {
        self.bathroom_set
    }

    pub fn closest_beacon(&self) -> &Closest {
        &self.closest_beacon
    }

    /// Set the destination. A non-bathroom destination clears the bathroom
    /// choice.
    pub fn set_destination(&mut self, id: RoomId) {
        if !id.is_bathroom() {
            self.bathroom_set = false;
        }
        info!(destination = %id, "destination set");
        self.destination = Some(id);
    }

    /// Set the starting point. Re-setting overwrites.
    pub fn set_origin(&mut self, id: RoomId) {
        info!(origin = %id, "origin set");
        self.origin = Some(id);
    }

    pub fn mark_floor_set(&mut self) {
        if !self.floor_set {
            debug!("floor confirmed");
        }
        self.floor_set = true;
    }

    pub fn mark_bathroom_set(&mut self) {
        if !self.bathroom_set {
            debug!("bathroom chosen");
        }
        self.bathroom_set = true;
    }

    /// Show or hide the map.
    ///
    /// Showing the map without a destination is refused; returns whether the
    /// request was applied.
    pub fn set_map_visible(&mut self, visible: bool) -> bool {
        if visible && self.destination.is_none() {
            warn!("refusing to show map without a destination");
            return false;
        }
        if self.map_visible != visible {
            info!(visible, "map visibility changed");
        }
        self.map_visible = visible;
        true
    }

    /// Mirror the tracker's latest verdict.
    pub fn set_closest_beacon(&mut self, closest: Closest) {
        self.closest_beacon = closest;
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self) {
        info!("navigation state reset");
        *self = Self::default();
    }

    /// Whether a starting point is known, reported or detected.
    pub fn has_start(&self) -> bool {
        self.has_start_with(&self.closest_beacon)
    }

    fn has_start_with(&self, closest: &Closest) -> bool {
        self.origin.is_some() || !closest.is_absent()
    }

    pub fn mode(&self) -> UiMode {
        if self.map_visible {
            UiMode::Map
        } else {
            UiMode::Home
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase_with(&self.closest_beacon)
    }

    /// Phase as it would be with `closest` as the tracker's verdict.
    pub fn phase_with(&self, closest: &Closest) -> Phase {
        if self.map_visible {
            Phase::Navigating
        } else if self.destination.is_none() {
            Phase::Idle
        } else if !self.has_start_with(closest) {
            Phase::OriginPending
        } else if !self.floor_set {
            Phase::FloorPending
        } else {
            Phase::Ready
        }
    }
}
