//! Mock order submission payload and acknowledgment.
//!
//! Checkout sends a snapshot of the cart to the storefront, which
//! acknowledges every submission. Nothing is validated or persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLineItem;

/// Body of `POST /api/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub cart: Vec<CartLineItem>,
    pub total: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Response to an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
}

impl OrderAck {
    /// Acknowledgment issued by the storefront, with a fresh order ID.
    #[must_use]
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Order placed".to_string(),
            order_id: Some(Uuid::new_v4()),
        }
    }

    /// Acknowledgment used when the storefront could not be reached.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            success: true,
            message: "Order placed in demo mode".to_string(),
            order_id: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_ack_has_order_id() {
        let ack = OrderAck::accepted();
        assert!(ack.success);
        assert!(ack.order_id.is_some());

        let json = serde_json::to_value(&ack).unwrap();
        assert!(json["orderId"].is_string());
    }

    #[test]
    fn test_demo_ack_omits_order_id() {
        let json = serde_json::to_value(OrderAck::demo()).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("orderId").is_none());
    }
}
