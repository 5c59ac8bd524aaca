use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status in the booking lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Set at payment success. The only state that accepts cancel/reschedule.
    Confirmed,
    /// Travel date has passed. Set externally, never by this pipeline.
    Completed,
    /// Terminal for booking purposes, but unlocks the refund track.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refund sub-status, tracked only once a refund exists
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Requested,
    Verified,
    ProcessingBank,
    Sent,
    Completed,
    Rejected,
}

impl RefundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefundStatus::Requested => "requested",
            RefundStatus::Verified => "verified",
            RefundStatus::ProcessingBank => "processing_bank",
            RefundStatus::Sent => "sent",
            RefundStatus::Completed => "completed",
            RefundStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RefundStatus::Completed | RefundStatus::Rejected)
    }
}

impl std::fmt::Display for RefundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One booked train segment, with the seats chosen for it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLeg {
    pub train_name: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub seats: Vec<String>,
}

/// The single source of truth for a customer's purchase.
///
/// Created at successful payment and owned by the order repository from then
/// on. Mutated only through the lifecycle and refund state machines, never
/// deleted: cancellation is a status, not removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub legs: Vec<OrderLeg>,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub passenger_count: u32,
    pub status: OrderStatus,
    /// Grand total actually paid, in minor-unit-free rupiah
    pub price: i64,
    /// Absent refund serializes as JSON null, never an empty string
    pub refund_status: Option<RefundStatus>,
    pub is_alternative: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to mint a confirmed order at payment success
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub legs: Vec<OrderLeg>,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub passenger_count: u32,
    pub price: i64,
    pub is_alternative: bool,
}

impl Order {
    /// Mint a new confirmed order from a paid booking
    pub fn confirmed(draft: OrderDraft) -> Self {
        let now = Utc::now();
        Self {
            id: new_order_id(),
            legs: draft.legs,
            origin: draft.origin,
            destination: draft.destination,
            date: draft.date,
            time: draft.time,
            passenger_count: draft.passenger_count,
            status: OrderStatus::Confirmed,
            price: draft.price,
            refund_status: None,
            is_alternative: draft.is_alternative,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Order ids keep the customer-facing TRX prefix of the legacy transaction ids
pub fn new_order_id() -> String {
    format!("TRX{}", Uuid::new_v4().simple())
}
