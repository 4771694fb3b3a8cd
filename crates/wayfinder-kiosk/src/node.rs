//! Kiosk node - wires the directory, the tracker task and the session.
//!
//! Architecture:
//! - Beacon tracker runs on its own task, fed through the scan channel
//! - The session lives on the serving loop, the single foreground context
//! - Commands arrive line by line; responses go out in the same order

use crate::config::KioskConfig;
use crate::error::Result;
use crate::protocol::{execute_command, KioskCommand, KioskResponse};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use wayfinder_nav::{DecisionEngine, Session};
use wayfinder_rooms::{RoomDirectory, RoomResolver};

/// A kiosk instance.
pub struct Kiosk {
    config: KioskConfig,
    directory: RoomDirectory,
}

impl Kiosk {
    /// Create a kiosk, loading the room directory.
    pub fn new(config: KioskConfig) -> Result<Self> {
        let directory = match &config.rooms_path {
            Some(path) => {
                tracing::info!("Loading room directory from {:?}", path);
                RoomDirectory::load(path)?
            }
            None => RoomDirectory::bundled()?,
        };
        tracing::info!(rooms = directory.len(), "room directory ready");

        Ok(Self { config, directory })
    }

    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    /// Serve stdin/stdout until input closes.
    pub async fn run(self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve commands from `reader`, writing responses to `writer`.
    pub async fn serve<R, W>(self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("Kiosk starting");
        tracing::info!("  Scan queue: {}", self.config.scan_queue);
        tracing::info!("  Accessible routes: {}", self.config.accessible_route);

        let (scan_tx, service, closest) = wayfinder_beacon::channel(self.config.scan_queue);
        let tracker = tokio::spawn(service.run());

        let engine = DecisionEngine::new(RoomResolver::new(self.directory));
        let mut session =
            Session::new(engine, closest).with_accessible_route(self.config.accessible_route);

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<KioskCommand>(&line) {
                Ok(cmd) => execute_command(cmd, &mut session, &scan_tx).await,
                Err(e) => KioskResponse::Error {
                    error: format!("Invalid command: {}", e),
                },
            };

            let response_json = serde_json::to_string(&response)? + "\n";
            writer.write_all(response_json.as_bytes()).await?;
            writer.flush().await?;
        }

        drop(scan_tx);
        if let Err(e) = tracker.await {
            tracing::error!("Beacon tracker error: {}", e);
        }
        tracing::info!("Input closed, kiosk stopping");

        Ok(())
    }
}
