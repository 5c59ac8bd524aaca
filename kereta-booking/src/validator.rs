use crate::itinerary::Itinerary;
use crate::seats::SeatTracker;
use kereta_shared::pii::Masked;
use serde::{Deserialize, Serialize};

/// One traveler's details, as entered in the booking form.
///
/// The ID number is wrapped so it never leaks into logs through `Debug`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerInfo {
    pub name: String,
    pub id_number: Masked<String>,
}

/// Why a booking cannot proceed. Wire values are machine-readable reasons
/// the client surfaces inline; both are user-correctable and retryable.
#[derive(Debug, thiserror::Error, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingDenied {
    #[error("every leg needs a seat selection matching the passenger count")]
    IncompleteSeats,

    #[error("every passenger needs a name and an ID number")]
    IncompletePassengerInfo,
}

/// Gate before payment: all-or-nothing, first failure wins.
///
/// Stateless and safe to re-evaluate on every state-changing action.
pub fn can_proceed(
    itinerary: &Itinerary,
    seats: &SeatTracker,
    passengers: &[PassengerInfo],
    passenger_count: u32,
) -> Result<(), BookingDenied> {
    if !seats.is_complete(itinerary, passenger_count) {
        return Err(BookingDenied::IncompleteSeats);
    }

    if passengers.len() != passenger_count as usize {
        return Err(BookingDenied::IncompletePassengerInfo);
    }
    for passenger in passengers {
        if passenger.name.trim().is_empty() || passenger.id_number.0.trim().is_empty() {
            return Err(BookingDenied::IncompletePassengerInfo);
        }
    }

    Ok(())
}
