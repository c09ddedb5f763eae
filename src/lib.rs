/// Shipbot - a fulfillment webhook that answers "where is my order?" for a
/// conversational agent platform.
///
/// The service exposes a single `POST /webhook` endpoint consumed by the
/// platform's intent classifier. Each request carries an intent name; the
/// handler dispatches on it, resolves the order's shipment date (static table
/// first, then the order-status API), and replies with a fulfillment payload
/// the platform renders back to the user.
///
/// # Architecture
///
/// The system uses:
/// - Axum for the HTTP surface
/// - reqwest for the outbound order-status API call
/// - Tokio for async runtime
/// - tracing for structured JSON logs
///
/// # Example
///
/// ```no_run
/// use shipbot::core::config::AppConfig;
/// use shipbot::server::{app_router, AppState};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     shipbot::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let state = AppState::new(&config)?;
///     let app = app_router(state);
///
///     let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
///     axum::serve(listener, app).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod orders;
pub mod server;
pub mod utils;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter and an environment-driven
/// filter (`RUST_LOG`, defaulting to `info`). Call once at process startup;
/// a second call panics.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
