//! Line-oriented JSON protocol between the presentation layer and the kiosk.
//!
//! One command per line in, one response per line out. `permission` and
//! `beacon` stand in for the radio callbacks and go to the tracker task;
//! everything else acts on the session directly.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wayfinder_beacon::{BeaconSignal, ScanEvent, ScanSender};
use wayfinder_nav::{AdvisoryOutcome, Blocked, RouteRequest, Session, SessionSnapshot};
use wayfinder_rooms::RoomLookup;

/// Command read from the input stream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum KioskCommand {
    /// Destination text changed
    Text { input: String },
    /// Go pressed
    Go,
    /// Start Over pressed
    StartOver,
    /// Dialog closed
    Dismiss,
    /// Nearest landmark entered in the no-start dialog
    ReportOrigin { text: String },
    /// Floor dialog answered
    ConfirmFloor,
    /// Bathroom dialog answered
    ConfirmBathroom,
    /// Show the map
    Navigate,
    /// Current snapshot
    Status,
    /// Scan permission result
    Permission { granted: bool },
    /// Beacon heard
    Beacon {
        id: String,
        rssi: i16,
        #[serde(default)]
        timestamp_ms: Option<u64>,
    },
    /// Health check
    Ping,
}

/// Response written to the output stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum KioskResponse {
    State { snapshot: SessionSnapshot },
    Route { route: RouteRequest },
    Blocked {
        reason: String,
        advisory: AdvisoryOutcome,
        message: Option<&'static str>,
    },
    Queued,
    Error { error: String },
    Pong,
}

impl From<Blocked> for KioskResponse {
    fn from(blocked: Blocked) -> Self {
        let advisory = AdvisoryOutcome::from(blocked);
        KioskResponse::Blocked {
            reason: blocked.to_string(),
            advisory,
            message: advisory.message(),
        }
    }
}

/// Apply one command.
pub async fn execute_command<L: RoomLookup>(
    cmd: KioskCommand,
    session: &mut Session<L>,
    scan_tx: &ScanSender,
) -> KioskResponse {
    debug!(?cmd, "command");
    match cmd {
        KioskCommand::Text { input } => {
            session.set_destination_text(&input);
            state(session)
        }

        KioskCommand::Go => {
            if let Some(outcome) = session.go() {
                info!(text = session.text(), %outcome, "go");
            }
            state(session)
        }

        KioskCommand::StartOver => {
            session.start_over();
            state(session)
        }

        KioskCommand::Dismiss => {
            session.dismiss_advisory();
            state(session)
        }

        KioskCommand::ReportOrigin { text } => match session.report_origin(&text) {
            Ok(_) => state(session),
            Err(blocked) => blocked.into(),
        },

        KioskCommand::ConfirmFloor => {
            session.confirm_floor();
            state(session)
        }

        KioskCommand::ConfirmBathroom => {
            session.confirm_bathroom();
            state(session)
        }

        KioskCommand::Navigate => match session.begin_navigation() {
            Ok(route) => KioskResponse::Route { route },
            Err(blocked) => blocked.into(),
        },

        KioskCommand::Status => state(session),

        KioskCommand::Permission { granted } => {
            forward(scan_tx, ScanEvent::Permission { granted }).await
        }

        KioskCommand::Beacon {
            id,
            rssi,
            timestamp_ms,
        } => {
            let signal = match timestamp_ms {
                Some(ts) => BeaconSignal::with_timestamp(id, rssi, ts),
                None => BeaconSignal::new(id, rssi),
            };
            forward(scan_tx, ScanEvent::Signal(signal)).await
        }

        KioskCommand::Ping => KioskResponse::Pong,
    }
}

fn state<L: RoomLookup>(session: &Session<L>) -> KioskResponse {
    KioskResponse::State {
        snapshot: session.snapshot(),
    }
}

async fn forward(scan_tx: &ScanSender, event: ScanEvent) -> KioskResponse {
    match scan_tx.send(event).await {
        Ok(()) => KioskResponse::Queued,
        Err(_) => KioskResponse::Error {
            error: Error::ScannerClosed.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_beacon::{channel, Closest, ClosestHandle};
    use wayfinder_nav::DecisionEngine;
    use wayfinder_rooms::{RoomDirectory, RoomResolver};

    fn session(closest: Closest) -> Session<RoomDirectory> {
        let engine = DecisionEngine::new(RoomResolver::new(RoomDirectory::bundled().unwrap()));
        Session::new(engine, ClosestHandle::fixed(closest))
    }

    fn json(response: &KioskResponse) -> serde_json::Value {
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn commands_parse() {
        let cmd: KioskCommand =
            serde_json::from_str(r#"{"cmd": "text", "input": "engr101"}"#).unwrap();
        assert_eq!(cmd, KioskCommand::Text { input: "engr101".into() });

        let cmd: KioskCommand = serde_json::from_str(r#"{"cmd": "start_over"}"#).unwrap();
        assert_eq!(cmd, KioskCommand::StartOver);

        let cmd: KioskCommand =
            serde_json::from_str(r#"{"cmd": "beacon", "id": "B7", "rssi": -60}"#).unwrap();
        assert_eq!(
            cmd,
            KioskCommand::Beacon {
                id: "B7".into(),
                rssi: -60,
                timestamp_ms: None,
            }
        );

        assert!(serde_json::from_str::<KioskCommand>(r#"{"cmd": "fly"}"#).is_err());
    }

    #[tokio::test]
    async fn go_reports_state_with_advisory() {
        let (scan_tx, _service, _handle) = channel(4);
        let mut session = session(Closest::None);

        let input = KioskCommand::Text {
            input: "engr101".into(),
        };
        execute_command(input, &mut session, &scan_tx).await;
        let response = execute_command(KioskCommand::Go, &mut session, &scan_tx).await;

        let value = json(&response);
        assert_eq!(value["status"], "state");
        assert_eq!(value["snapshot"]["advisory"], "no_start_detected");
        assert_eq!(value["snapshot"]["destination"], "ENGR101");
    }

    #[tokio::test]
    async fn navigate_blocked_then_route() {
        let (scan_tx, _service, _handle) = channel(4);
        let mut session = session(Closest::Beacon("B3".into()));

        let input = KioskCommand::Text {
            input: "library".into(),
        };
        execute_command(input, &mut session, &scan_tx).await;
        execute_command(KioskCommand::Go, &mut session, &scan_tx).await;

        let value = json(&execute_command(KioskCommand::Navigate, &mut session, &scan_tx).await);
        assert_eq!(value["status"], "blocked");
        assert_eq!(value["advisory"], "floor_clarification_needed");
        assert_eq!(value["reason"], "current floor not confirmed");

        execute_command(KioskCommand::ConfirmFloor, &mut session, &scan_tx).await;
        let value = json(&execute_command(KioskCommand::Navigate, &mut session, &scan_tx).await);
        assert_eq!(value["status"], "blocked");
        assert_eq!(value["reason"], "current floor not confirmed");

        let value = json(&execute_command(KioskCommand::Go, &mut session, &scan_tx).await);
        assert_eq!(value["snapshot"]["advisory"], "none");
        let value = json(&execute_command(KioskCommand::Navigate, &mut session, &scan_tx).await);
        assert_eq!(value["status"], "route");
        assert_eq!(value["route"]["destination"], "LIBRARY");
        assert_eq!(value["route"]["start"]["kind"], "beacon");
        assert_eq!(value["route"]["start"]["id"], "B3");
    }

    #[tokio::test]
    async fn unknown_origin_is_blocked() {
        let (scan_tx, _service, _handle) = channel(4);
        let mut session = session(Closest::None);

        let response = execute_command(
            KioskCommand::ReportOrigin { text: "narnia".into() },
            &mut session,
            &scan_tx,
        )
        .await;
        assert_eq!(json(&response)["advisory"], "invalid_destination");
    }

    #[tokio::test]
    async fn scan_events_are_queued() {
        let (scan_tx, _service, _handle) = channel(4);
        let mut session = session(Closest::None);

        let response = execute_command(
            KioskCommand::Permission { granted: true },
            &mut session,
            &scan_tx,
        )
        .await;
        assert!(matches!(response, KioskResponse::Queued));
    }

    #[tokio::test]
    async fn stopped_tracker_is_reported() {
        let (scan_tx, service, _handle) = channel(4);
        drop(service);
        let mut session = session(Closest::None);

        let response = execute_command(
            KioskCommand::Beacon { id: "B1".into(), rssi: -40, timestamp_ms: Some(5) },
            &mut session,
            &scan_tx,
        )
        .await;
        assert_eq!(json(&response)["error"], "beacon tracker has stopped");
    }

    #[tokio::test]
    async fn ping_pongs() {
        let (scan_tx, _service, _handle) = channel(4);
        let mut session = session(Closest::None);
        let response = execute_command(KioskCommand::Ping, &mut session, &scan_tx).await;
        assert_eq!(json(&response), serde_json::json!({ "status": "pong" }));
    }
}
