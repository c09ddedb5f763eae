//! Webhook entrypoint - thin router that delegates to intent handlers.
//!
//! This module handles:
//! - Permissive body parsing (malformed JSON never fails the request)
//! - Intent extraction from `queryResult.intent.displayName`
//! - Dispatch to the ending and shipment-details handlers

use axum::Json;
use axum::extract::State;
use serde_json::Value;
use tracing::{error, info};

use super::helpers::{create_ending_payload, create_fulfillment_payload};
use super::shipment_handler;
use crate::server::AppState;

/// Intent that closes the conversation with a thank-you reply.
const INTENT_ENDING: &str = "Default Ending";
/// Intent that asks for an order's shipment date.
const INTENT_FETCH_SHIPMENT: &str = "Fetch Shipment details";

const MSG_UNHANDLED: &str = "Sorry, I couldn't handle this request.";

/// Handle `POST /webhook`.
///
/// Routes the request by intent name. The platform expects a conversational
/// reply no matter what went wrong, so every path - including a body that is
/// not JSON at all - returns HTTP 200 with a fulfillment payload.
#[tracing::instrument(level = "info", skip_all)]
pub async fn webhook(State(state): State<AppState>, body: String) -> Json<Value> {
    let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    info!(request = %request, "Received request");

    let Some(intent_name) = request
        .pointer("/queryResult/intent/displayName")
        .and_then(Value::as_str)
    else {
        error!("Request has no intent display name");
        return Json(create_fulfillment_payload(MSG_UNHANDLED));
    };

    info!(intent_name, "Dispatching intent");

    match intent_name {
        INTENT_ENDING => Json(create_ending_payload(&state.config.ending_audio_url)),
        INTENT_FETCH_SHIPMENT => {
            Json(shipment_handler::handle_shipment_details(&state, &request).await)
        }
        _ => {
            error!(intent_name, "Unhandled intent");
            Json(create_fulfillment_payload(MSG_UNHANDLED))
        }
    }
}
