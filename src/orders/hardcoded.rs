//! Static order table checked before the order-status API.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::info;

use crate::utils::dates::to_human_readable;

/// Orders answered locally, mapped to their raw shipment timestamps.
static HARDCODED_ORDERS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("31313", "2022-08-18T21:31:25.565Z")]));

/// Look up an order in the static table.
///
/// A hit returns the already-formatted shipment date; a miss returns `None`
/// so the caller can fall through to the remote resolver.
#[must_use]
pub fn lookup(order_id: &str) -> Option<String> {
    HARDCODED_ORDERS.get(order_id).map(|iso_date| {
        info!(order_id, "Order is hardcoded. Returning hardcoded shipment date");
        to_human_readable(iso_date)
    })
}
