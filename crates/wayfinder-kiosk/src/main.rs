//! Wayfinder kiosk binary
//!
//! Reads intents from stdin, writes responses to stdout. Logs go to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayfinder_kiosk::{Kiosk, KioskConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "wayfinder_kiosk=info,wayfinder_nav=info,wayfinder_beacon=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Wayfinder kiosk");

    let config = KioskConfig::from_env()?;
    let kiosk = Kiosk::new(config)?;
    kiosk.run().await?;

    Ok(())
}
