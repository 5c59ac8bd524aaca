use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use kereta_booking::itinerary;
use kereta_booking::seats::SeatTracker;
use kereta_booking::validator::{can_proceed, PassengerInfo};
use kereta_core::search::SearchRoute;
use kereta_order::models::{Order, OrderDraft, OrderLeg};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/bookings", post(create_booking))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// The route exactly as the search endpoint returned it
    pub route: SearchRoute,
    pub passenger_count: u32,
    pub passengers_info: Vec<PassengerInfo>,
    /// Seat ids per leg, keyed by leg index ("0".."n-1")
    pub selected_seats: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub order_id: String,
    pub subtotal: i64,
    pub tax: i64,
    pub price: i64,
    pub order: Order,
}

/// POST /api/bookings
/// Validate a booking and mint the confirmed order at payment success
async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    // 1. Normalize the route into one itinerary shape
    let itinerary = itinerary::normalize(&request.route)?;

    // 2. Replay the seat selections through the tracker
    let mut seats = SeatTracker::new();
    for (leg_key, seat_ids) in &request.selected_seats {
        seats.select(leg_key, seat_ids.clone())?;
    }

    // 3. Gate: seats first, then passenger info
    can_proceed(
        &itinerary,
        &seats,
        &request.passengers_info,
        request.passenger_count,
    )?;

    // 4. Price the itinerary
    let price = state.fares.compute(&itinerary, request.passenger_count);

    tracing::info!(
        origin = %itinerary.origin,
        destination = %itinerary.destination,
        passengers = request.passenger_count,
        total = price.total,
        payment_method = request.payment_method.as_deref().unwrap_or("unspecified"),
        "booking accepted"
    );

    // 5. Mint the order. Mock payment always succeeds.
    let legs: Vec<OrderLeg> = itinerary
        .legs
        .iter()
        .enumerate()
        .map(|(index, leg)| OrderLeg {
            train_name: leg.train_name.clone(),
            origin: leg.origin.clone(),
            destination: leg.destination.clone(),
            date: leg.date.clone(),
            time: format!("{} - {}", leg.departure_time, leg.arrival_time),
            seats: seats
                .selection(&index.to_string())
                .unwrap_or_default()
                .to_vec(),
        })
        .collect();

    let order = Order::confirmed(OrderDraft {
        origin: itinerary.origin.clone(),
        destination: itinerary.destination.clone(),
        date: itinerary.legs[0].date.clone(),
        time: itinerary.legs[0].departure_time.clone(),
        passenger_count: request.passenger_count,
        price: price.total,
        is_alternative: itinerary.transfer_count > 0,
        legs,
    });

    let order_id = state.orders.create(&order).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            order_id,
            subtotal: price.subtotal,
            tax: price.tax,
            price: price.total,
            order,
        }),
    ))
}
