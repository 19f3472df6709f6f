//! Mock order submission.
//!
//! Orders are acknowledged unconditionally. The body is logged when it looks
//! like an order and otherwise ignored; nothing is validated or stored.

use axum::{Json, body::Bytes};
use tracing::instrument;

use tinyshop_core::{OrderAck, OrderSubmission};

use crate::error::add_breadcrumb;

/// Accept an order submission.
#[instrument(skip(body), fields(bytes = body.len()))]
pub async fn submit(body: Bytes) -> Json<OrderAck> {
    match serde_json::from_slice::<OrderSubmission>(&body) {
        Ok(order) => tracing::info!(
            lines = order.cart.len(),
            total = %order.total,
            timestamp = %order.timestamp,
            "Order received"
        ),
        Err(e) => tracing::debug!(error = %e, "Order body is not a cart snapshot"),
    }

    let ack = OrderAck::accepted();
    if let Some(order_id) = ack.order_id {
        let order_id = order_id.to_string();
        add_breadcrumb(
            "checkout",
            "Order acknowledged",
            Some(&[("order_id", order_id.as_str())]),
        );
    }
    Json(ack)
}
