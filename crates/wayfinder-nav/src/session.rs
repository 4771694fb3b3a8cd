//! The intent surface the presentation layer talks to.

use crate::advisory::AdvisoryOutcome;
use crate::engine::DecisionEngine;
use crate::error::{Blocked, Result};
use crate::state::{NavigationState, Phase, UiMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wayfinder_beacon::{BeaconId, Closest, ClosestHandle};
use wayfinder_rooms::{normalize, RoomId, RoomLookup, RoomMatch};

/// Where a route starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Start {
    /// A landmark the user reported
    Landmark(RoomId),
    /// The closest beacon
    Beacon(BeaconId),
}

/// Handoff to the rendering engine once the map is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: Start,
    pub destination: RoomId,
    /// Prefer step-free routes
    pub accessible: bool,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub mode: UiMode,
    pub phase: Phase,
    pub advisory: AdvisoryOutcome,
    pub text: String,
    pub destination: Option<RoomId>,
    pub origin: Option<RoomId>,
    pub closest_beacon: Closest,
    pub floor_set: bool,
    pub bathroom_set: bool,
    pub can_go: bool,
    pub can_start_over: bool,
}

/// One user's session: the store, the pending input and the open dialog.
pub struct Session<L> {
    engine: DecisionEngine<L>,
    state: NavigationState,
    closest: ClosestHandle,
    text: String,
    advisory: AdvisoryOutcome,
    /// Outcome of the latest Go for the current text; cleared when the text changes.
    last_go: Option<AdvisoryOutcome>,
    accessible_route: bool,
}

impl<L: RoomLookup> Session<L> {
    pub fn new(engine: DecisionEngine<L>, closest: ClosestHandle) -> Self {
        Self {
            engine,
            state: NavigationState::new(),
            closest,
            text: String::new(),
            advisory: AdvisoryOutcome::None,
            last_go: None,
            accessible_route: false,
        }
    }

    /// Request accessible routes in every handoff.
    #[must_use]
    pub fn with_accessible_route(mut self, accessible: bool) -> Self {
        self.accessible_route = accessible;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The pending destination text, normalized.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The dialog currently open.
    pub fn advisory(&self) -> AdvisoryOutcome {
        self.advisory
    }

    pub fn mode(&self) -> UiMode {
        self.state.mode()
    }

    pub fn phase(&self) -> Phase {
        match self.state.phase_with(&self.closest.current()) {
            Phase::Idle if !self.text.is_empty() => Phase::DestinationEntered,
            phase => phase,
        }
    }

    /// Update the destination text as the user types.
    ///
    /// Input is locked while the map is showing; returns whether it was taken.
    pub fn set_destination_text(&mut self, input: &str) -> bool {
        if self.state.is_map_visible() {
            return false;
        }
        let text = normalize(input);
        if text != self.text {
            self.last_go = None;
            self.text = text;
        }
        true
    }

    /// Whether the Go button is enabled.
    pub fn can_go(&self) -> bool {
        !self.text.is_empty() && !self.state.is_map_visible()
    }

    /// Whether the Start Over button is enabled.
    pub fn can_start_over(&self) -> bool {
        !self.text.is_empty() && self.state.is_map_visible()
    }

    /// Press Go. Returns `None` when the button is disabled.
    pub fn go(&mut self) -> Option<AdvisoryOutcome> {
        if !self.can_go() {
            debug!("go ignored, button disabled");
            return None;
        }

        self.refresh_closest();
        let outcome = self.engine.go(&mut self.state, &self.text);
        self.advisory = outcome;
        self.last_go = Some(outcome);
        Some(outcome)
    }

    /// Close the open dialog.
    pub fn dismiss_advisory(&mut self) {
        self.advisory = AdvisoryOutcome::None;
    }

    /// Answer the no-start dialog with the nearest landmark.
    pub fn report_origin(&mut self, text: &str) -> Result<RoomId> {
        let room = match self.engine.resolver().resolve(text) {
            RoomMatch::Found(room) if !room.is_bathroom() => room,
            _ => return Err(Blocked::InvalidDestination),
        };

        self.state.set_origin(room.clone());
        self.clear_if(AdvisoryOutcome::NoStartDetected);
        Ok(room)
    }

    /// Answer the floor dialog.
    pub fn confirm_floor(&mut self) {
        self.state.mark_floor_set();
        self.clear_if(AdvisoryOutcome::FloorClarificationNeeded);
    }

    /// Answer the bathroom dialog.
    pub fn confirm_bathroom(&mut self) {
        self.state.mark_bathroom_set();
        self.clear_if(AdvisoryOutcome::BathroomClarificationNeeded);
    }

    /// Show the map and hand the route to the renderer.
    ///
    /// Requires a Go for the current text that raised no advisory, and that
    /// the text still names the stored destination.
    pub fn begin_navigation(&mut self) -> Result<RouteRequest> {
        self.refresh_closest();
        match self.last_go {
            None => return Err(Blocked::InvalidDestination),
            Some(outcome) => {
                if let Some(blocked) = outcome.blocked() {
                    return Err(blocked);
                }
            }
        }
        self.engine.readiness(&self.state)?;
        if self.engine.resolver().resolve(&self.text).room() != self.state.destination() {
            return Err(Blocked::InvalidDestination);
        }
        let route = self.route_request().ok_or(Blocked::NoOriginAvailable)?;

        if !self.state.is_map_visible() && self.state.set_map_visible(true) {
            self.advisory = AdvisoryOutcome::None;
            info!(
                destination = %route.destination,
                accessible = route.accessible,
                "navigation started"
            );
        }
        Ok(route)
    }

    /// The active route, while navigating.
    pub fn route(&self) -> Option<RouteRequest> {
        if self.state.is_map_visible() {
            self.route_request()
        } else {
            None
        }
    }

    /// Start over from anywhere.
    pub fn start_over(&mut self) {
        self.engine.start_over(&mut self.state);
        self.text.clear();
        self.advisory = AdvisoryOutcome::None;
        self.last_go = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode(),
            phase: self.phase(),
            advisory: self.advisory,
            text: self.text.clone(),
            destination: self.state.destination().cloned(),
            origin: self.state.origin().cloned(),
            closest_beacon: self.closest.current(),
            floor_set: self.state.is_floor_set(),
            bathroom_set: self.state.is_bathroom_set(),
            can_go: self.can_go(),
            can_start_over: self.can_start_over(),
        }
    }

    fn refresh_closest(&mut self) {
        self.state.set_closest_beacon(self.closest.current());
    }

    fn clear_if(&mut self, answered: AdvisoryOutcome) {
        if self.advisory == answered {
            self.advisory = AdvisoryOutcome::None;
        }
    }

    fn route_request(&self) -> Option<RouteRequest> {
        let destination = self.state.destination()?.clone();
        let start = match (self.state.origin(), self.state.closest_beacon().beacon()) {
            (Some(origin), _) => Start::Landmark(origin.clone()),
            (None, Some(beacon)) => Start::Beacon(beacon.clone()),
            (None, None) => return None,
        };
        Some(RouteRequest {
            start,
            destination,
            accessible: self.accessible_route,
        })
    }
}
