//! The single advisory a Go press can raise.

use crate::error::Blocked;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the presentation layer should show after a Go press.
///
/// One value, one dialog. Two advisories for the same intent cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryOutcome {
    /// Nothing to ask; ready to navigate
    #[default]
    None,
    /// Destination text did not resolve
    InvalidDestination,
    /// No beacon and no origin: ask for the nearest landmark
    NoStartDetected,
    /// Ask which bathroom
    BathroomClarificationNeeded,
    /// Ask which floor the user is on
    FloorClarificationNeeded,
}

impl AdvisoryOutcome {
    /// Whether a dialog must be shown.
    pub fn is_blocking(self) -> bool {
        self != AdvisoryOutcome::None
    }

    /// The blocking reason behind this advisory.
    pub fn blocked(self) -> Option<Blocked> {
        match self {
            AdvisoryOutcome::None => None,
            AdvisoryOutcome::InvalidDestination => Some(Blocked::InvalidDestination),
            AdvisoryOutcome::NoStartDetected => Some(Blocked::NoOriginAvailable),
            AdvisoryOutcome::BathroomClarificationNeeded => Some(Blocked::BathroomNotDisambiguated),
            AdvisoryOutcome::FloorClarificationNeeded => Some(Blocked::FloorNotConfirmed),
        }
    }

    /// Dialog text.
    pub fn message(self) -> Option<&'static str> {
        match self {
            AdvisoryOutcome::None => None,
            AdvisoryOutcome::InvalidDestination => {
                Some("That destination could not be found. Check the room number and try again.")
            }
            AdvisoryOutcome::NoStartDetected => {
                Some("We could not detect where you are. Enter the nearest room number.")
            }
            AdvisoryOutcome::BathroomClarificationNeeded => {
                Some("Which bathroom would you like to go to?")
            }
            AdvisoryOutcome::FloorClarificationNeeded => Some("Which floor are you on?"),
        }
    }
}

impl From<Blocked> for AdvisoryOutcome {
    fn from(blocked: Blocked) -> Self {
        match blocked {
            Blocked::InvalidDestination => AdvisoryOutcome::InvalidDestination,
            Blocked::NoOriginAvailable => AdvisoryOutcome::NoStartDetected,
            Blocked::BathroomNotDisambiguated => AdvisoryOutcome::BathroomClarificationNeeded,
            Blocked::FloorNotConfirmed => AdvisoryOutcome::FloorClarificationNeeded,
        }
    }
}

impl fmt::Display for AdvisoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.blocked() {
            Some(blocked) => write!(f, "{}", blocked),
            None => write!(f, "none"),
        }
    }
}
