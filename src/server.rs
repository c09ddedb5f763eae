//! HTTP server configuration and request routing.
//!
//! Builds the axum router for the webhook service. Requests flow through:
//! 1. Request ID generation
//! 2. Request/response tracing
//! 3. Timeout enforcement (30s)
//! 4. Handler execution

use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api::handler;
use crate::core::config::AppConfig;
use crate::orders::OrderStatusClient;

/// Shared application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration loaded at startup.
    pub config: AppConfig,
    /// Client for the order-status API.
    pub orders: OrderStatusClient,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// # Errors
    ///
    /// Fails when the order-status HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let orders = OrderStatusClient::new(
            config.shipment_api_url.clone(),
            Duration::from_secs(config.shipment_api_timeout_secs),
        )
        .context("failed to build order-status client")?;

        Ok(Self { config: config.clone(), orders })
    }
}

/// Build the axum router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/webhook", post(handler::webhook))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

/// Liveness probe.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Middleware to inject a request ID into all responses.
///
/// Adds an `X-Request-Id` header so individual webhook calls can be traced
/// after the fact.
async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut req = req;
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", header_value);
    }

    response
}
