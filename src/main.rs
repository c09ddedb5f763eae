//! Shipbot webhook server binary.
//!
//! # Environment Variables
//!
//! - `PORT` — HTTP port (default: 5000)
//! - `SHIPMENT_API_URL` — order-status API endpoint
//! - `ENDING_AUDIO_URL` — audio clip for the ending intent
//! - `SHIPMENT_API_TIMEOUT_SECS` — outbound call timeout (default: 10)
//! - `RUST_LOG` — tracing filter (default: "info")

use anyhow::{Context, Result};
use tracing::info;

use shipbot::core::config::AppConfig;
use shipbot::server::{AppState, app_router};

#[tokio::main]
async fn main() -> Result<()> {
    shipbot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    let state = AppState::new(&config)?;

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let app = app_router(state);

    info!(addr = %bind_addr, "Shipbot webhook server starting");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app).await.context("server failed")?;

    Ok(())
}
