//! # Order Endpoints
//!
//! The backend scopes `/api/orders` to the caller: buyers see what they
//! bought, farmers and cooperative owners what they sold.

use shared::dto::{Id, Order, OrderStatus, PlaceOrderRequest, UpdateOrderStatusRequest};

use super::client::{segment, ApiClient};
use crate::error::{AppError, Result};

pub async fn list_orders(client: &ApiClient) -> Result<Vec<Order>> {
    client.get("/api/orders").await
}

pub async fn get_order(client: &ApiClient, id: &Id) -> Result<Order> {
    client.get(&format!("/api/orders/{}", segment(id.as_str()))).await
}

pub async fn place_order(client: &ApiClient, request: &PlaceOrderRequest) -> Result<Order> {
    if !request.quantity.is_finite() || request.quantity <= 0.0 {
        return Err(AppError::Validation("Quantity must be greater than zero".to_string()));
    }
    client.post("/api/orders", request).await
}

/// Move an order to `next`. Rejected locally if the lifecycle does not allow it.
pub async fn update_status(
    client: &ApiClient,
    order: &Order,
    next: OrderStatus,
    as_seller: bool,
) -> Result<Order> {
    check_transition(order.status, next, as_seller)?;
    client
        .put(
            &format!("/api/orders/{}/status", segment(order.id.as_str())),
            &UpdateOrderStatusRequest { status: next },
        )
        .await
}

pub fn check_transition(current: OrderStatus, next: OrderStatus, as_seller: bool) -> Result<()> {
    let allowed = if as_seller {
        current.seller_transitions().contains(&next)
    } else {
        next == OrderStatus::Cancelled && current.buyer_can_cancel()
    };
    if allowed {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "An order that is {} cannot be marked {}",
            current.label().to_lowercase(),
            next.label().to_lowercase()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_transitions() {
        assert!(check_transition(OrderStatus::Pending, OrderStatus::Confirmed, true).is_ok());
        assert!(check_transition(OrderStatus::Shipped, OrderStatus::Delivered, true).is_ok());
        assert!(check_transition(OrderStatus::Delivered, OrderStatus::Pending, true).is_err());
    }

    #[test]
    fn test_buyer_may_only_cancel_pending() {
        assert!(check_transition(OrderStatus::Pending, OrderStatus::Cancelled, false).is_ok());
        assert!(check_transition(OrderStatus::Confirmed, OrderStatus::Cancelled, false).is_err());
        assert!(check_transition(OrderStatus::Pending, OrderStatus::Confirmed, false).is_err());
    }

    #[test]
    fn test_rejection_message() {
        let err = check_transition(OrderStatus::Delivered, OrderStatus::Shipped, true).unwrap_err();
        assert_eq!(err.user_message(), "An order that is delivered cannot be marked shipped");
    }
}
