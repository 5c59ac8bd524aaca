use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Audit record for a state change on an order.
///
/// Written alongside every cancel, reschedule, and admin refund update so the
/// manual-correction path stays accountable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderChange {
    pub id: Uuid,
    pub order_id: String,
    pub change_type: String,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub changed_by: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OrderChange {
    pub fn new(
        order_id: impl Into<String>,
        change_type: impl Into<String>,
        old_value: Option<Value>,
        new_value: Option<Value>,
        changed_by: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: order_id.into(),
            change_type: change_type.into(),
            old_value,
            new_value,
            changed_by: changed_by.into(),
            notes,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_records_carry_actor_and_notes() {
        let change = OrderChange::new(
            "TRX0001",
            "REFUND_STATUS",
            Some(serde_json::json!({"refundStatus": "requested"})),
            Some(serde_json::json!({"refundStatus": "verified"})),
            "ADMIN",
            Some("ID document checked".to_string()),
        );

        assert_eq!(change.order_id, "TRX0001");
        assert_eq!(change.changed_by, "ADMIN");
        assert_eq!(change.notes.as_deref(), Some("ID document checked"));
    }
}
