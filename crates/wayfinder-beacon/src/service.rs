//! The scanning boundary.
//!
//! Radio callbacks run on their own schedule. They are funneled through an
//! mpsc channel into a single task that owns the [`ProximityTracker`]; the
//! verdict crosses back to the foreground through a watch slot, so a reader
//! always sees a whole value and never waits on the radio.

use crate::signal::{BeaconSignal, Closest};
use crate::tracker::ProximityTracker;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// An event delivered by the scanning subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Result of the scan permission prompt
    Permission { granted: bool },
    /// A beacon was heard
    Signal(BeaconSignal),
}

/// Sending half handed to the scanning subsystem.
pub type ScanSender = mpsc::Sender<ScanEvent>;

/// Create the scan channel, the tracker task and a read handle.
///
/// The returned [`TrackerService`] does nothing until [`TrackerService::run`]
/// is spawned.
pub fn channel(capacity: usize) -> (ScanSender, TrackerService, ClosestHandle) {
    let (scan_tx, scan_rx) = mpsc::channel(capacity);
    let (closest_tx, closest_rx) = watch::channel(Closest::Unknown);

    let service = TrackerService {
        tracker: ProximityTracker::new(),
        events: scan_rx,
        closest_tx,
    };

    (scan_tx, service, ClosestHandle { rx: closest_rx })
}

/// Owns the tracker and applies scan events in arrival order.
pub struct TrackerService {
    tracker: ProximityTracker,
    events: mpsc::Receiver<ScanEvent>,
    closest_tx: watch::Sender<Closest>,
}

impl TrackerService {
    /// Process events until every [`ScanSender`] is dropped.
    pub async fn run(mut self) {
        debug!("beacon tracker started");
        while let Some(event) = self.events.recv().await {
            self.apply(event);
        }
        debug!("scan stream closed, beacon tracker stopping");
    }

    fn apply(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::Permission { granted } => {
                if granted {
                    info!("beacon scanning authorized");
                } else {
                    warn!("beacon scanning denied, origin must be self-reported");
                }
                self.tracker.set_authorized(granted);
            }
            ScanEvent::Signal(signal) => self.tracker.observe(signal),
        }

        let closest = self.tracker.closest();
        self.closest_tx.send_if_modified(|slot| {
            if *slot == closest {
                return false;
            }
            info!(from = %slot, to = %closest, "closest beacon changed");
            *slot = closest;
            true
        });
    }
}

/// Read side of the closest-beacon slot.
#[derive(Debug, Clone)]
pub struct ClosestHandle {
    rx: watch::Receiver<Closest>,
}

impl ClosestHandle {
    /// A handle that always reads `closest`. Useful when no scanner exists.
    pub fn fixed(closest: Closest) -> Self {
        let (_tx, rx) = watch::channel(closest);
        Self { rx }
    }

    /// The latest published verdict.
    pub fn current(&self) -> Closest {
        self.rx.borrow().clone()
    }

    /// Wait for the verdict to change.
    ///
    /// Returns `None` once the tracker task has stopped.
    pub async fn changed(&mut self) -> Option<Closest> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready_eq};

    #[tokio::test]
    async fn publishes_closest_changes() {
        let (scan_tx, service, mut handle) = channel(16);
        let task = tokio::spawn(service.run());

        assert_eq!(handle.current(), Closest::Unknown);

        scan_tx.send(ScanEvent::Permission { granted: true }).await.unwrap();
        assert_eq!(handle.changed().await, Some(Closest::None));

        scan_tx
            .send(ScanEvent::Signal(BeaconSignal::with_timestamp("B7", -60, 1)))
            .await
            .unwrap();
        assert_eq!(handle.changed().await, Some(Closest::Beacon("B7".into())));
        assert_eq!(handle.current(), Closest::Beacon("B7".into()));

        drop(scan_tx);
        task.await.unwrap();
        assert_eq!(handle.changed().await, None);
    }

    #[test]
    fn unchanged_verdict_does_not_wake_readers() {
        let (_scan_tx, mut service, mut handle) = channel(4);

        {
            let mut changed = tokio_test::task::spawn(handle.changed());
            assert_pending!(changed.poll());
            service.apply(ScanEvent::Permission { granted: true });
            assert!(changed.is_woken());
            assert_ready_eq!(changed.poll(), Some(Closest::None));
        }

        {
            let mut changed = tokio_test::task::spawn(handle.changed());
            assert_pending!(changed.poll());
            service.apply(ScanEvent::Signal(BeaconSignal::with_timestamp("B1", -70, 1)));
            assert!(changed.is_woken());
            assert_ready_eq!(changed.poll(), Some(Closest::Beacon("B1".into())));
        }

        let mut changed = tokio_test::task::spawn(handle.changed());
        assert_pending!(changed.poll());
        service.apply(ScanEvent::Signal(BeaconSignal::with_timestamp("B1", -65, 2)));
        assert!(!changed.is_woken());
        assert_pending!(changed.poll());
    }

    #[test]
    fn fixed_handle_reads_constant() {
        let handle = ClosestHandle::fixed(Closest::Beacon("B3".into()));
        assert_eq!(handle.current(), Closest::Beacon("B3".into()));
    }
}
