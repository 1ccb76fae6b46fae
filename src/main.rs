//! TinyQR - desktop QR code generator
//!
//! Main entry point for the TinyQR application.

use anyhow::{Context, Result};
use tinyqr::AppConfig;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinyqr=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TinyQR v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::default();
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e).context("refusing to start");
    }

    tinyqr::ui::run(config).map_err(|e| anyhow::anyhow!("event loop failed: {}", e))
}
