//! The Go / Start Over decision engine.

use crate::advisory::AdvisoryOutcome;
use crate::error::{Blocked, Result};
use crate::state::NavigationState;
use tracing::{debug, info};
use wayfinder_rooms::{RoomLookup, RoomMatch, RoomResolver};

/// Decides what follows a user intent and applies the matching transition.
///
/// Never fails: every branch ends in an [`AdvisoryOutcome`].
#[derive(Debug, Clone)]
pub struct DecisionEngine<L> {
    resolver: RoomResolver<L>,
}

impl<L: RoomLookup> DecisionEngine<L> {
    pub fn new(resolver: RoomResolver<L>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &RoomResolver<L> {
        &self.resolver
    }

    /// Run the Go intent for `text`.
    ///
    /// Resolution failures and the bathroom question end the intent before
    /// any mutation. Otherwise the destination is committed and the stored
    /// state is checked for a starting point, then for the floor.
    pub fn go(&self, state: &mut NavigationState, text: &str) -> AdvisoryOutcome {
        let room = match self.resolver.resolve(text) {
            RoomMatch::Found(room) => room,
            RoomMatch::NotFound => {
                info!(text = text.trim(), "destination not found");
                return AdvisoryOutcome::InvalidDestination;
            }
        };

        if room.is_bathroom() && !state.is_bathroom_set() {
            debug!("bathroom requested, asking which one");
            return AdvisoryOutcome::BathroomClarificationNeeded;
        }

        state.set_destination(room);

        let outcome = Self::follow_up(state);
        debug!(%outcome, phase = ?state.phase(), "go evaluated");
        outcome
    }

    /// Start over from any state.
    pub fn start_over(&self, state: &mut NavigationState) {
        state.reset();
    }

    /// Check that the stored state is cleared for navigation.
    pub fn readiness(&self, state: &NavigationState) -> Result<()> {
        let destination = state.destination().ok_or(Blocked::InvalidDestination)?;
        if destination.is_bathroom() && !state.is_bathroom_set() {
            return Err(Blocked::BathroomNotDisambiguated);
        }
        match Self::follow_up(state).blocked() {
            Some(blocked) => Err(blocked),
            None => Ok(()),
        }
    }

    /// Origin, then floor, against the stored destination.
    fn follow_up(state: &NavigationState) -> AdvisoryOutcome {
        let has_destination = state.destination().is_some();

        if state.closest_beacon().is_absent() && state.origin().is_none() && has_destination {
            AdvisoryOutcome::NoStartDetected
        } else if !state.is_floor_set() && has_destination {
            AdvisoryOutcome::FloorClarificationNeeded
        } else {
            AdvisoryOutcome::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Closest;
    use proptest::prelude::*;
    use wayfinder_rooms::{RoomDirectory, RoomEntry, RoomId};

    fn engine() -> DecisionEngine<RoomDirectory> {
        let directory = RoomDirectory::from_entries([
            RoomEntry::new("ENGR101"),
            RoomEntry::new("ENGR102"),
            RoomEntry::new("LIBRARY"),
        ])
        .unwrap();
        DecisionEngine::new(RoomResolver::new(directory))
    }

    fn room(id: &str) -> RoomId {
        RoomId::parse(id).unwrap()
    }

    #[test]
    fn unknown_text_is_invalid_and_mutates_nothing() {
        let engine = engine();
        let mut state = NavigationState::new();

        assert_eq!(engine.go(&mut state, "ENGR999"), AdvisoryOutcome::InvalidDestination);
        assert_eq!(state, NavigationState::new());
    }

    #[test]
    fn bathroom_asks_first_then_commits() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_closest_beacon(Closest::Beacon("B2".into()));

        assert_eq!(
            engine.go(&mut state, "BATHROOM"),
            AdvisoryOutcome::BathroomClarificationNeeded
        );
        assert_eq!(state.destination(), None);

        state.mark_bathroom_set();
        assert_eq!(
            engine.go(&mut state, "bathroom"),
            AdvisoryOutcome::FloorClarificationNeeded
        );
        assert_eq!(state.destination(), Some(&RoomId::bathroom()));
    }

    #[test]
    fn origin_check_precedes_floor_check() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_closest_beacon(Closest::None);

        assert_eq!(engine.go(&mut state, "ENGR101"), AdvisoryOutcome::NoStartDetected);
        assert_eq!(state.destination(), Some(&room("ENGR101")));
    }

    #[test]
    fn unauthorized_scanning_counts_as_no_beacon() {
        let engine = engine();
        let mut state = NavigationState::new();

        assert_eq!(engine.go(&mut state, "ENGR101"), AdvisoryOutcome::NoStartDetected);
    }

    #[test]
    fn beacon_present_asks_for_floor() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_closest_beacon(Closest::Beacon("B7".into()));

        assert_eq!(
            engine.go(&mut state, "ENGR101"),
            AdvisoryOutcome::FloorClarificationNeeded
        );
        assert!(state.origin().is_none());
    }

    #[test]
    fn floor_then_ready() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_origin(room("LIBRARY"));

        assert_eq!(
            engine.go(&mut state, "ENGR101"),
            AdvisoryOutcome::FloorClarificationNeeded
        );

        state.mark_floor_set();
        assert_eq!(engine.go(&mut state, "ENGR101"), AdvisoryOutcome::None);
        assert!(engine.readiness(&state).is_ok());
    }

    #[test]
    fn no_start_repeats_on_every_press() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_closest_beacon(Closest::None);

        for _ in 0..5 {
            assert_eq!(engine.go(&mut state, "ENGR101"), AdvisoryOutcome::NoStartDetected);
        }
    }

    #[test]
    fn follow_up_reads_stored_destination() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_closest_beacon(Closest::None);

        assert_eq!(engine.go(&mut state, "ENGR101"), AdvisoryOutcome::NoStartDetected);

        // The origin dialog is answered elsewhere; the next press moves on to
        // the floor question for the stored destination.
        state.set_origin(room("LIBRARY"));
        assert_eq!(
            engine.go(&mut state, "ENGR102"),
            AdvisoryOutcome::FloorClarificationNeeded
        );
        assert_eq!(state.destination(), Some(&room("ENGR102")));
    }

    #[test]
    fn invalid_text_keeps_earlier_destination_and_raises_one_advisory() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_closest_beacon(Closest::None);
        engine.go(&mut state, "ENGR101");

        assert_eq!(engine.go(&mut state, "nowhere"), AdvisoryOutcome::InvalidDestination);
        assert_eq!(state.destination(), Some(&room("ENGR101")));
    }

    #[test]
    fn start_over_returns_to_idle() {
        let engine = engine();
        let mut state = NavigationState::new();
        state.set_origin(room("LIBRARY"));
        state.mark_floor_set();
        engine.go(&mut state, "ENGR101");
        state.set_map_visible(true);

        engine.start_over(&mut state);
        assert_eq!(state, NavigationState::new());
        assert_eq!(state.phase(), crate::Phase::Idle);
    }

    #[test]
    fn readiness_reasons() {
        let engine = engine();
        let mut state = NavigationState::new();
        assert_eq!(engine.readiness(&state), Err(Blocked::InvalidDestination));

        state.set_destination(RoomId::bathroom());
        assert_eq!(engine.readiness(&state), Err(Blocked::BathroomNotDisambiguated));

        state.set_destination(room("ENGR101"));
        assert_eq!(engine.readiness(&state), Err(Blocked::NoOriginAvailable));

        state.set_closest_beacon(Closest::Beacon("B1".into()));
        assert_eq!(engine.readiness(&state), Err(Blocked::FloorNotConfirmed));

        state.mark_floor_set();
        assert_eq!(engine.readiness(&state), Ok(()));
    }

    proptest! {
        #[test]
        fn unlisted_text_never_changes_destination(
            text in "[A-Za-z0-9 ]{0,12}",
            prior in prop::option::of(prop::sample::select(vec!["ENGR101", "LIBRARY"])),
        ) {
            let engine = engine();
            let normalized = wayfinder_rooms::normalize(&text);
            prop_assume!(!["ENGR101", "ENGR102", "LIBRARY", "BATHROOM"].contains(&normalized.as_str()));

            let mut state = NavigationState::new();
            if let Some(prior) = prior {
                state.set_destination(room(prior));
            }
            let before = state.clone();

            prop_assert_eq!(engine.go(&mut state, &text), AdvisoryOutcome::InvalidDestination);
            prop_assert_eq!(state, before);
        }
    }
}
