//! Order id handling and shipment-date resolution.

pub mod client;
pub mod hardcoded;

pub use client::OrderStatusClient;

use tracing::warn;

/// Sanitize a raw order id from the platform's parameter map.
///
/// Order ids are all-digit strings; surrounding whitespace is tolerated.
/// Returns `None` when the trimmed value is empty or contains a non-digit.
#[must_use]
pub fn sanitize_order_id(order_id: &str) -> Option<&str> {
    let sanitized = order_id.trim();
    if sanitized.is_empty() || !sanitized.chars().all(|c| c.is_ascii_digit()) {
        warn!(order_id, "Sanitization failed for order ID");
        return None;
    }
    Some(sanitized)
}
