//! Handler for the shipment-details intent.
//!
//! Extracts the order id from the request parameters, validates it, and
//! resolves the shipment date: the static order table is consulted first,
//! then the order-status API. Every outcome, including resolution failures,
//! is folded into a fulfillment payload.

use serde_json::Value;
use tracing::info;

use super::helpers::create_fulfillment_payload;
use crate::errors::OrderStatusError;
use crate::orders::{self, hardcoded};
use crate::server::AppState;

/// Sentinel the platform substitutes when the order-id slot was not filled.
const UNKNOWN_ORDER_ID: &str = "Unknown";

const MSG_MISSING_ORDER_ID: &str = "Sorry, I couldn't find the order ID.";
const MSG_INVALID_ORDER_ID: &str =
    "The order ID provided is invalid. Please check and try again.";

/// Handle the shipment-details intent.
///
/// Never fails: validation and resolution errors become user-facing
/// fulfillment text.
pub async fn handle_shipment_details(state: &AppState, request: &Value) -> Value {
    let order_id = request
        .pointer("/queryResult/parameters/orderid")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_ORDER_ID);

    if order_id == UNKNOWN_ORDER_ID {
        return create_fulfillment_payload(MSG_MISSING_ORDER_ID);
    }

    let Some(order_id) = orders::sanitize_order_id(order_id) else {
        return create_fulfillment_payload(MSG_INVALID_ORDER_ID);
    };

    let response_text = match resolve_shipment_date(state, order_id).await {
        Ok(shipment_date) => {
            format!("The shipment date for order ID {order_id} is {shipment_date}.")
        }
        // The error's Display text is the user-facing message
        Err(e) => e.to_string(),
    };

    create_fulfillment_payload(&response_text)
}

/// Resolve an order id to a formatted shipment date.
///
/// The static table wins when it has the order; only misses reach the
/// order-status API, and the API is called at most once per request.
async fn resolve_shipment_date(
    state: &AppState,
    order_id: &str,
) -> Result<String, OrderStatusError> {
    if let Some(shipment_date) = hardcoded::lookup(order_id) {
        return Ok(shipment_date);
    }

    info!(order_id, "Order not hardcoded, querying order-status API");
    state.orders.fetch_shipment_date(order_id).await
}
