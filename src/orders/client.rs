//! HTTP client for the order-status API.
//!
//! Issues a single bounded POST per resolution; there are no retries, so
//! every failure is categorized and surfaced to the handler immediately.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::errors::OrderStatusError;
use crate::utils::dates::to_human_readable;

/// Response body of the order-status API.
#[derive(Debug, Deserialize)]
struct OrderStatusResponse {
    #[serde(rename = "shipmentDate")]
    shipment_date: Option<String>,
}

/// Client for the order-status API.
///
/// Wraps a pooled `reqwest::Client` with a request timeout so a stuck
/// downstream cannot hold a webhook request open indefinitely.
#[derive(Debug, Clone)]
pub struct OrderStatusClient {
    client: reqwest::Client,
    api_url: String,
}

impl OrderStatusClient {
    /// Create a client for the given endpoint with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error when the HTTP client cannot be
    /// constructed.
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }

    /// Fetch and format the shipment date for an order.
    ///
    /// Sends `{"orderId": ...}` to the order-status API and runs the response
    /// through the date formatter. A missing `shipmentDate` field formats as
    /// `"Not available"`.
    ///
    /// # Errors
    ///
    /// - [`OrderStatusError::InvalidOrderId`] when the API answers 400
    /// - [`OrderStatusError::UnexpectedStatus`] for any other non-200 status
    /// - [`OrderStatusError::Transport`] for connection failures, timeouts,
    ///   and unparsable response bodies
    pub async fn fetch_shipment_date(&self, order_id: &str) -> Result<String, OrderStatusError> {
        info!(order_id, "Sending API request for order");

        let response = self
            .client
            .post(&self.api_url)
            .json(&json!({ "orderId": order_id }))
            .send()
            .await
            .map_err(|e| transport_error(order_id, &e))?;

        let status = response.status();
        info!(order_id, status = status.as_u16(), "API response status");

        if status == StatusCode::BAD_REQUEST {
            warn!(order_id, "Invalid order ID provided");
            return Err(OrderStatusError::InvalidOrderId);
        }

        if status != StatusCode::OK {
            error!(order_id, status = status.as_u16(), "API request failed");
            return Err(OrderStatusError::UnexpectedStatus(status.as_u16()));
        }

        let data: OrderStatusResponse = response
            .json()
            .await
            .map_err(|e| transport_error(order_id, &e))?;

        let shipment_date = data.shipment_date.as_deref().unwrap_or("Not available");
        info!(order_id, shipment_date, "Shipment date from API");

        Ok(to_human_readable(shipment_date))
    }
}

fn transport_error(order_id: &str, error: &reqwest::Error) -> OrderStatusError {
    error!(order_id, error = %error, "API request failed");
    OrderStatusError::Transport {
        order_id: order_id.to_string(),
        message: error.to_string(),
    }
}
