use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use kereta_order::changes::OrderChange;
use kereta_order::lifecycle::OrderMutation;
use kereta_order::models::{Order, RefundStatus};
use kereta_order::refund::RefundProgress;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/cancel", post(cancel_order))
        .route("/api/orders/{id}/reschedule", post(reschedule_order))
        .route("/api/orders/{id}/refund-status", post(set_refund_status))
        .route("/api/orders/{id}/changes", get(list_changes))
}

/// An order as clients see it: the stored record plus the derived refund
/// progress, which is display state and never persisted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_progress: Option<RefundProgress>,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let refund_progress = order.refund_status.map(RefundProgress::for_status);
        Self {
            order,
            refund_progress,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundStatusRequest {
    pub status: RefundStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// GET /api/orders
async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderView>>, AppError> {
    let orders = state.orders.list().await?;
    Ok(Json(orders.into_iter().map(OrderView::from).collect()))
}

/// GET /api/orders/{id}
async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderView>, AppError> {
    let order = state
        .orders
        .get(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order not found: {}", order_id)))?;

    Ok(Json(order.into()))
}

/// POST /api/orders/{id}/cancel
async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderView>, AppError> {
    let before = state
        .orders
        .get(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order not found: {}", order_id)))?;

    let order = state.orders.update(&order_id, OrderMutation::Cancel).await?;

    // Audit failure never rolls back a committed transition
    let _ = state
        .orders
        .add_change(&OrderChange::new(
            &order_id,
            "CANCELLED",
            Some(serde_json::json!({ "status": before.status })),
            Some(serde_json::json!({
                "status": order.status,
                "refundStatus": order.refund_status,
            })),
            "CUSTOMER",
            None,
        ))
        .await;

    Ok(Json(order.into()))
}

/// POST /api/orders/{id}/reschedule
async fn reschedule_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(request): Json<RescheduleRequest>,
) -> Result<Json<OrderView>, AppError> {
    let before = state
        .orders
        .get(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order not found: {}", order_id)))?;

    let order = state
        .orders
        .update(
            &order_id,
            OrderMutation::Reschedule {
                date: request.date,
                time: request.time,
            },
        )
        .await?;

    let _ = state
        .orders
        .add_change(&OrderChange::new(
            &order_id,
            "RESCHEDULED",
            Some(serde_json::json!({ "date": before.date, "time": before.time })),
            Some(serde_json::json!({ "date": order.date, "time": order.time })),
            "CUSTOMER",
            None,
        ))
        .await;

    Ok(Json(order.into()))
}

/// POST /api/orders/{id}/refund-status
/// Admin correction path: any of the six refund values may be set directly
async fn set_refund_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(request): Json<RefundStatusRequest>,
) -> Result<Json<OrderView>, AppError> {
    let before = state
        .orders
        .get(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order not found: {}", order_id)))?;

    let order = state
        .orders
        .update(
            &order_id,
            OrderMutation::SetRefundStatus {
                status: request.status,
            },
        )
        .await?;

    let _ = state
        .orders
        .add_change(&OrderChange::new(
            &order_id,
            "REFUND_STATUS",
            Some(serde_json::json!({ "refundStatus": before.refund_status })),
            Some(serde_json::json!({ "refundStatus": order.refund_status })),
            "ADMIN",
            request.notes,
        ))
        .await;

    Ok(Json(order.into()))
}

/// GET /api/orders/{id}/changes
async fn list_changes(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Vec<OrderChange>>, AppError> {
    state
        .orders
        .get(&order_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order not found: {}", order_id)))?;

    let changes = state.orders.list_changes(&order_id).await?;
    Ok(Json(changes))
}
