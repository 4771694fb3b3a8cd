//! Kiosk configuration.

use crate::error::{Error, Result};
use std::path::PathBuf;
use wayfinder_beacon::DEFAULT_SCAN_QUEUE;

/// Configuration for a kiosk process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Room directory file; `None` uses the bundled directory
    pub rooms_path: Option<PathBuf>,

    /// Capacity of the scan-event channel
    pub scan_queue: usize,

    /// Request accessible routes
    pub accessible_route: bool,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            rooms_path: None,
            scan_queue: DEFAULT_SCAN_QUEUE,
            accessible_route: false,
        }
    }
}

impl KioskConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let rooms_path = var("WAYFINDER_ROOMS")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let scan_queue = match var("WAYFINDER_SCAN_QUEUE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(Error::Config(format!(
                        "WAYFINDER_SCAN_QUEUE must be a positive integer, got {:?}",
                        raw
                    )))
                }
            },
            None => defaults.scan_queue,
        };

        let accessible_route = var("WAYFINDER_ACCESSIBLE_ROUTE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.accessible_route);

        Ok(Self {
            rooms_path,
            scan_queue,
            accessible_route,
        })
    }
}
