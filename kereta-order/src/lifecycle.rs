use crate::models::{Order, OrderStatus, RefundStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("reschedule requires both a new date and a new time")]
    MissingSchedule,

    #[error("order {0} has no refund in progress")]
    NoRefund(String),
}

/// A single state-changing request against a persisted order.
///
/// The repository applies the mutation inside its per-order critical section,
/// so at most one transition commits per logical change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderMutation {
    Cancel,
    Reschedule { date: String, time: String },
    SetRefundStatus { status: RefundStatus },
}

impl OrderMutation {
    pub fn apply(&self, order: &mut Order) -> Result<(), OrderError> {
        match self {
            OrderMutation::Cancel => order.cancel(),
            OrderMutation::Reschedule { date, time } => order.reschedule(date, time),
            OrderMutation::SetRefundStatus { status } => order.set_refund_status(*status),
        }
    }
}

impl Order {
    /// Transition: confirmed -> cancelled.
    ///
    /// A paid order gets its refund track seeded at `requested`; a zero-price
    /// order has nothing to refund.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if self.status != OrderStatus::Confirmed {
            return Err(OrderError::InvalidTransition {
                from: self.status.to_string(),
                to: OrderStatus::Cancelled.to_string(),
            });
        }

        self.status = OrderStatus::Cancelled;
        if self.price > 0 {
            self.refund_status = Some(RefundStatus::Requested);
        }
        self.touch();
        Ok(())
    }

    /// Transition: confirmed -> confirmed, with date/time replaced verbatim.
    ///
    /// No validation against the original travel window or past dates: the
    /// reschedule window is a product decision, not enforced here.
    pub fn reschedule(&mut self, new_date: &str, new_time: &str) -> Result<(), OrderError> {
        if self.status != OrderStatus::Confirmed {
            return Err(OrderError::InvalidTransition {
                from: self.status.to_string(),
                to: OrderStatus::Confirmed.to_string(),
            });
        }
        if new_date.trim().is_empty() || new_time.trim().is_empty() {
            return Err(OrderError::MissingSchedule);
        }

        self.date = new_date.to_string();
        self.time = new_time.to_string();
        self.touch();
        Ok(())
    }

    /// Administrative refund update. The admin tool is authoritative and may
    /// set any of the six values; only the no-refund case is rejected.
    pub fn set_refund_status(&mut self, status: RefundStatus) -> Result<(), OrderError> {
        if self.refund_status.is_none() {
            return Err(OrderError::NoRefund(self.id.clone()));
        }

        self.refund_status = Some(status);
        self.touch();
        Ok(())
    }
}
