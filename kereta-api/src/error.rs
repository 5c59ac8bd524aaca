use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kereta_booking::itinerary::ItineraryError;
use kereta_booking::seats::SeatError;
use kereta_booking::validator::BookingDenied;
use kereta_core::repository::RepoError;
use kereta_core::search::SearchError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Booking gate failed; the body carries the machine-readable reason
    Denied(BookingDenied),
    /// Route payload parsed but cannot be normalized into an itinerary
    BadRoute(ItineraryError),
    Seats(SeatError),
    NotFound(String),
    /// The lifecycle state machine rejected the transition
    Conflict(String),
    Upstream(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Denied(denied) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": denied.to_string(), "reason": denied }),
            ),
            AppError::BadRoute(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": format!("route details unavailable: {}", err) }),
            ),
            AppError::Seats(err) => (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Conflict(msg) => {
                tracing::warn!("rejected transition: {}", msg);
                (StatusCode::CONFLICT, json!({ "error": msg }))
            }
            AppError::Upstream(msg) => {
                tracing::error!("upstream failure: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "search service unavailable" }),
                )
            }
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingDenied> for AppError {
    fn from(err: BookingDenied) -> Self {
        AppError::Denied(err)
    }
}

impl From<ItineraryError> for AppError {
    fn from(err: ItineraryError) -> Self {
        AppError::BadRoute(err)
    }
}

impl From<SeatError> for AppError {
    fn from(err: SeatError) -> Self {
        AppError::Seats(err)
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => AppError::NotFound(format!("order not found: {}", id)),
            RepoError::Transition(transition) => AppError::Conflict(transition.to_string()),
            RepoError::Backend(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}
