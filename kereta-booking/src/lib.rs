pub mod fare;
pub mod itinerary;
pub mod seats;
pub mod validator;

pub use fare::{FareCalculator, FareConfig, PriceBreakdown, DEFAULT_TAX_RATE};
pub use itinerary::{normalize, Itinerary, ItineraryError, Leg};
pub use seats::{SeatError, SeatTracker};
pub use validator::{can_proceed, BookingDenied, PassengerInfo};
