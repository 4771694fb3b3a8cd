//! Wayfinder Beacon Tracking
//!
//! Reduces a continuous stream of BLE beacon reports to a single answer:
//! which beacon is the user standing closest to right now.
//!
//! # Architecture
//!
//! - **Signal**: Beacon identifiers, raw signal reports and the `Closest` verdict
//! - **Tracker**: Synchronous best-signal bookkeeping ([`ProximityTracker`])
//! - **Service**: The scanning boundary. Radio callbacks arrive as [`ScanEvent`]s
//!   on an mpsc channel, a background task feeds them to the tracker and
//!   publishes every change of the verdict into a watch slot read by
//!   [`ClosestHandle`]
//!
//! The foreground decision path never blocks on the radio. It reads whatever
//! the slot holds; beacon absence is a value, not a timeout.
//!
//! # Example
//!
//! ```no_run
//! use wayfinder_beacon::{channel, BeaconSignal, ScanEvent};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (scan_tx, service, handle) = channel(64);
//!     tokio::spawn(service.run());
//!
//!     scan_tx.send(ScanEvent::Permission { granted: true }).await.ok();
//!     scan_tx.send(ScanEvent::Signal(BeaconSignal::new("B7", -61))).await.ok();
//!
//!     println!("closest: {}", handle.current());
//! }
//! ```

mod service;
mod signal;
mod tracker;

pub use service::{channel, ClosestHandle, ScanEvent, ScanSender, TrackerService};
pub use signal::{BeaconId, BeaconSignal, Closest};
pub use tracker::ProximityTracker;

/// Default capacity of the scan-event channel.
pub const DEFAULT_SCAN_QUEUE: usize = 256;
