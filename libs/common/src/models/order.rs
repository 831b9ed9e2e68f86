//! Order model and the order status state machine
//!
//! Order status is the one explicit enumerated state machine in the
//! system: {not-shipped, awaiting-receipt, completed}, wire codes 0/1/2.
//! Transitions are any-to-any; neither the backend nor this client imposes
//! a forward-only ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::blind_box::{BlindBox, BoxItem};
use crate::models::user::User;

/// Shipping status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OrderStatus {
    NotShipped,
    AwaitingReceipt,
    Completed,
}

impl OrderStatus {
    /// Wire code used by the backend
    pub fn code(self) -> u8 {
        self.into()
    }

    /// Human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::NotShipped => "not shipped",
            OrderStatus::AwaitingReceipt => "awaiting receipt",
            OrderStatus::Completed => "completed",
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> u8 {
        match status {
            OrderStatus::NotShipped => 0,
            OrderStatus::AwaitingReceipt => 1,
            OrderStatus::Completed => 2,
        }
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OrderStatus::NotShipped),
            1 => Ok(OrderStatus::AwaitingReceipt),
            2 => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status code {other}")),
        }
    }
}

/// A record of one purchase-and-reveal transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user: User,
    #[serde(rename = "box")]
    pub blind_box: BlindBox,
    /// The specific item the reveal bound to this order
    pub item: BoxItem,
    pub purchase_time: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Per-status order counts shown in the admin order view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderCounts {
    pub total: usize,
    pub not_shipped: usize,
    pub awaiting_receipt: usize,
    pub completed: usize,
}

impl OrderCounts {
    /// Derive counts from a full order set. `total` always equals the sum
    /// of the three per-status counts.
    pub fn tally(orders: &[Order]) -> Self {
        let mut counts = OrderCounts {
            total: orders.len(),
            ..OrderCounts::default()
        };
        for order in orders {
            match order.status {
                OrderStatus::NotShipped => counts.not_shipped += 1,
                OrderStatus::AwaitingReceipt => counts.awaiting_receipt += 1,
                OrderStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }
}
