//! Wayfinder Kiosk
//!
//! Host process for an indoor-wayfinding session. The presentation layer
//! writes intents as JSON lines; the kiosk answers each with the session
//! snapshot, a route handoff or the reason navigation is blocked.
//!
//! # Architecture
//!
//! - **Config**: Environment-driven [`KioskConfig`]
//! - **Protocol**: [`KioskCommand`] / [`KioskResponse`] wire types
//! - **Node**: [`Kiosk`] wires the room directory, the beacon tracker task
//!   and the navigation session together
//!
//! # Example
//!
//! ```no_run
//! use wayfinder_kiosk::{Kiosk, KioskConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let kiosk = Kiosk::new(KioskConfig::from_env()?)?;
//!     kiosk.run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod protocol;

pub use config::KioskConfig;
pub use error::{Error, Result};
pub use node::Kiosk;
pub use protocol::{execute_command, KioskCommand, KioskResponse};
