//! # Order DTOs
//!
//! Orders move through a fixed lifecycle. The seller side (farmer or
//! cooperative owner) advances it; buyers may only cancel while it is still
//! pending.
//!
//! ```text
//! Pending ──► Confirmed ──► Shipped ──► Delivered
//!    │            │
//!    └────────────┴──► Cancelled
//! ```

use serde::{Deserialize, Serialize};

use super::Id;

/// Order lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    Unknown,
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" | "placed" | "new" => OrderStatus::Pending,
            "confirmed" | "accepted" | "processing" => OrderStatus::Confirmed,
            "shipped" | "in_transit" | "dispatched" => OrderStatus::Shipped,
            "delivered" | "completed" | "fulfilled" => OrderStatus::Delivered,
            "cancelled" | "canceled" | "rejected" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown,
        }
    }
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    /// States the seller may move an order to from this one.
    pub fn seller_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Unknown => &[],
        }
    }

    /// Whether the buyer can still cancel.
    pub fn buyer_can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Shipped)
    }
}

/// An order as listed for buyers, farmers and cooperative owners.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: Id,
    #[serde(default, alias = "product_name")]
    pub crop_name: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, alias = "total_price", alias = "amount")]
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub farmer_name: Option<String>,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Buyer's order form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceOrderRequest {
    pub crop_id: Id,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

/// Status change submitted by the seller or a cancelling buyer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_reads_legacy_field_names() {
        let order: Order = serde_json::from_str(
            r#"{"id": 55, "product_name": "Sorghum", "quantity": 12, "total_price": 1800, "status": "completed"}"#,
        )
        .unwrap();
        assert_eq!(order.crop_name.as_deref(), Some("Sorghum"));
        assert_eq!(order.total_amount, 1800.0);
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_terminal_states_have_no_transitions() {
        assert!(OrderStatus::Delivered.seller_transitions().is_empty());
        assert!(OrderStatus::Cancelled.seller_transitions().is_empty());
        assert!(OrderStatus::Unknown.seller_transitions().is_empty());
    }

    #[test]
    fn test_transitions_never_go_back_to_pending() {
        let all = [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ];
        for status in all {
            assert!(!status.seller_transitions().contains(&OrderStatus::Pending));
            assert!(!status.seller_transitions().contains(&status));
        }
    }

    #[test]
    fn test_buyer_cancel_only_while_pending() {
        assert!(OrderStatus::Pending.buyer_can_cancel());
        assert!(!OrderStatus::Confirmed.buyer_can_cancel());
        assert!(!OrderStatus::Shipped.buyer_can_cancel());
    }
}
