use thiserror::Error;

/// Failures while resolving a shipment date through the order-status API.
///
/// The `Display` text of each variant is the exact fulfillment text shown to
/// the end user; handlers render errors with `to_string()` at the response
/// boundary and nowhere else.
#[derive(Debug, Error)]
pub enum OrderStatusError {
    #[error("The order ID is invalid. Please check and try again.")]
    InvalidOrderId,

    #[error("Error: API request failed with status code {0}")]
    UnexpectedStatus(u16),

    #[error("Error: Unable to fetch shipment date for order {order_id}. Details: {message}")]
    Transport { order_id: String, message: String },
}
