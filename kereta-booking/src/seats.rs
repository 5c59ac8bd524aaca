use crate::itinerary::Itinerary;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeatError {
    #[error("seat {seat} selected twice for leg {leg}")]
    DuplicateSeat { leg: String, seat: String },
}

/// Tracks selected seats per leg during an interactive booking.
///
/// Selections are keyed by leg index ("0".."n-1"). Re-selecting a leg
/// overwrites the prior selection wholesale: last write wins, matching a user
/// changing their mind in the seat picker. The same seat identifier may
/// appear on different legs (different physical train); only duplicates
/// within one leg's selection are rejected.
#[derive(Debug, Clone, Default)]
pub struct SeatTracker {
    selections: BTreeMap<String, Vec<String>>,
}

impl SeatTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the seat selection for one leg, replacing any prior one.
    pub fn select(&mut self, leg_key: &str, seat_ids: Vec<String>) -> Result<(), SeatError> {
        let mut seen = HashSet::new();
        for seat in &seat_ids {
            if !seen.insert(seat.as_str()) {
                return Err(SeatError::DuplicateSeat {
                    leg: leg_key.to_string(),
                    seat: seat.clone(),
                });
            }
        }

        self.selections.insert(leg_key.to_string(), seat_ids);
        Ok(())
    }

    pub fn selection(&self, leg_key: &str) -> Option<&[String]> {
        self.selections.get(leg_key).map(Vec::as_slice)
    }

    /// True iff the recorded leg keys match the itinerary's exactly (extra
    /// and missing keys both fail) and every selection seats every passenger.
    pub fn is_complete(&self, itinerary: &Itinerary, passenger_count: u32) -> bool {
        if self.selections.len() != itinerary.legs.len() {
            return false;
        }

        itinerary.leg_keys().all(|key| {
            self.selections
                .get(&key)
                .map(|seats| seats.len() == passenger_count as usize)
                .unwrap_or(false)
        })
    }
}
