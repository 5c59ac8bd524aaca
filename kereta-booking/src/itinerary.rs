use kereta_core::search::{DirectRouteRecord, MultiLegRouteRecord, SearchRoute};
use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("route has no legs")]
    NoLegs,

    #[error("leg {index} is missing {field}")]
    MissingField { index: usize, field: &'static str },
}

/// One point-to-point train segment. Immutable once the itinerary is built.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub train_name: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub date: String,
    pub seat_class: String,
    pub unit_price: i64,
}

/// Normalized itinerary: one shape for direct and transfer routes alike.
///
/// Leg order is preserved exactly as received from the search service, which
/// also guarantees segment continuity; neither is re-checked here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub origin: String,
    pub destination: String,
    pub total_duration: String,
    pub transfer_count: usize,
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Stable per-leg keys ("0".."n-1") used to index seat selections
    pub fn leg_keys(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.legs.len()).map(|index| index.to_string())
    }
}

/// Reconcile the two search-result shapes into one internal representation.
pub fn normalize(route: &SearchRoute) -> Result<Itinerary, ItineraryError> {
    let itinerary = match route {
        SearchRoute::Direct(record) => from_direct(record)?,
        SearchRoute::Transfer(record) => from_transfer(record)?,
    };

    for (index, leg) in itinerary.legs.iter().enumerate() {
        require(&leg.train_name, index, "train name")?;
        require(&leg.origin, index, "origin")?;
        require(&leg.destination, index, "destination")?;
        require(&leg.departure_time, index, "departure time")?;
        require(&leg.arrival_time, index, "arrival time")?;
        require(&leg.date, index, "date")?;
        require(&leg.seat_class, index, "seat class")?;
    }

    Ok(itinerary)
}

fn from_direct(record: &DirectRouteRecord) -> Result<Itinerary, ItineraryError> {
    let leg = Leg {
        train_name: record.train_name.clone(),
        origin: record.departure.city.clone(),
        destination: record.arrival.city.clone(),
        departure_time: record.departure.time.clone(),
        arrival_time: record.arrival.time.clone(),
        date: record.date.clone(),
        seat_class: record.train_type.clone(),
        unit_price: record.price,
    };

    Ok(Itinerary {
        origin: leg.origin.clone(),
        destination: leg.destination.clone(),
        total_duration: record.duration.clone(),
        transfer_count: 0,
        legs: vec![leg],
    })
}

fn from_transfer(record: &MultiLegRouteRecord) -> Result<Itinerary, ItineraryError> {
    if record.legs.is_empty() {
        return Err(ItineraryError::NoLegs);
    }

    let legs: Vec<Leg> = record
        .legs
        .iter()
        .map(|leg| Leg {
            train_name: leg.train_name.clone(),
            origin: leg.from.clone(),
            destination: leg.to.clone(),
            departure_time: leg.departure_time.clone(),
            arrival_time: leg.arrival_time.clone(),
            date: leg.date.clone(),
            seat_class: leg.category.clone(),
            unit_price: leg.price,
        })
        .collect();

    // Endpoints fall back to the leg sequence when the search service did not
    // inject them on the record.
    let origin = record
        .origin
        .clone()
        .unwrap_or_else(|| legs[0].origin.clone());
    let destination = record
        .destination
        .clone()
        .unwrap_or_else(|| legs[legs.len() - 1].destination.clone());

    Ok(Itinerary {
        origin,
        destination,
        total_duration: record.total_duration.clone(),
        transfer_count: legs.len() - 1,
        legs,
    })
}

fn require(value: &str, index: usize, field: &'static str) -> Result<(), ItineraryError> {
    if value.trim().is_empty() {
        return Err(ItineraryError::MissingField { index, field });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use kereta_core::search::{LegRecord, StationStop};

    pub(crate) fn direct_record(price: i64) -> DirectRouteRecord {
        DirectRouteRecord {
            train_id: "KAI001".to_string(),
            train_name: "Argo Bromo Anggrek".to_string(),
            train_type: "Executive".to_string(),
            departure: StationStop {
                station_code: "GMR".to_string(),
                station_name: "Gambir".to_string(),
                city: "Jakarta".to_string(),
                time: "08:00".to_string(),
            },
            arrival: StationStop {
                station_code: "SGU".to_string(),
                station_name: "Surabaya Pasarturi".to_string(),
                city: "Surabaya".to_string(),
                time: "17:00".to_string(),
            },
            duration: "9h 0m".to_string(),
            price,
            available_seats: 50,
            date: "2025-10-20".to_string(),
        }
    }

    pub(crate) fn transfer_record(prices: &[i64]) -> MultiLegRouteRecord {
        let cities = ["Jakarta", "Cirebon", "Surabaya", "Malang", "Jember"];
        let legs = prices
            .iter()
            .enumerate()
            .map(|(i, price)| LegRecord {
                train_name: format!("Train {}", i + 1),
                category: "Executive".to_string(),
                from: cities[i].to_string(),
                to: cities[i + 1].to_string(),
                duration: "3h 0m".to_string(),
                price: *price,
                departure_time: "08:00".to_string(),
                arrival_time: "11:00".to_string(),
                date: "2025-10-20".to_string(),
            })
            .collect();

        MultiLegRouteRecord {
            route: "Jakarta → Surabaya".to_string(),
            origin: Some("Jakarta".to_string()),
            destination: None,
            total_duration: "11h 30m".to_string(),
            transfers: (prices.len() - 1) as u32,
            total_price: prices.iter().sum(),
            legs,
        }
    }

    #[test]
    fn direct_route_becomes_a_single_leg_itinerary() {
        let itinerary = normalize(&SearchRoute::Direct(direct_record(500_000))).unwrap();

        assert_eq!(itinerary.legs.len(), 1);
        assert_eq!(itinerary.transfer_count, 0);
        assert_eq!(itinerary.origin, "Jakarta");
        assert_eq!(itinerary.destination, "Surabaya");
        assert_eq!(itinerary.total_duration, "9h 0m");
        assert_eq!(itinerary.legs[0].seat_class, "Executive");
        assert_eq!(itinerary.legs[0].unit_price, 500_000);
    }

    #[test]
    fn transfer_route_preserves_leg_order() {
        let itinerary =
            normalize(&SearchRoute::Transfer(transfer_record(&[250_000, 300_000]))).unwrap();

        assert_eq!(itinerary.legs.len(), 2);
        assert_eq!(itinerary.transfer_count, 1);
        assert_eq!(itinerary.legs[0].origin, "Jakarta");
        assert_eq!(itinerary.legs[0].destination, "Cirebon");
        assert_eq!(itinerary.legs[1].origin, "Cirebon");
        assert_eq!(itinerary.legs[1].destination, "Surabaya");
        // destination was not injected by the service: recovered from the last leg
        assert_eq!(itinerary.destination, "Surabaya");
    }

    #[test]
    fn empty_transfer_route_is_malformed() {
        let mut record = transfer_record(&[250_000]);
        record.legs.clear();

        let err = normalize(&SearchRoute::Transfer(record)).unwrap_err();
        assert_eq!(err, ItineraryError::NoLegs);
    }

    #[test]
    fn blank_leg_fields_are_malformed() {
        let mut record = transfer_record(&[250_000, 300_000]);
        record.legs[1].train_name = "  ".to_string();

        let err = normalize(&SearchRoute::Transfer(record)).unwrap_err();
        assert_eq!(
            err,
            ItineraryError::MissingField {
                index: 1,
                field: "train name"
            }
        );
    }

    #[test]
    fn blank_times_and_seat_class_are_malformed_too() {
        let mut record = transfer_record(&[250_000, 300_000]);
        record.legs[0].departure_time = String::new();
        let err = normalize(&SearchRoute::Transfer(record)).unwrap_err();
        assert_eq!(
            err,
            ItineraryError::MissingField {
                index: 0,
                field: "departure time"
            }
        );

        let mut record = transfer_record(&[250_000, 300_000]);
        record.legs[1].arrival_time = " ".to_string();
        let err = normalize(&SearchRoute::Transfer(record)).unwrap_err();
        assert_eq!(
            err,
            ItineraryError::MissingField {
                index: 1,
                field: "arrival time"
            }
        );

        let mut record = transfer_record(&[250_000]);
        record.legs[0].category = String::new();
        let err = normalize(&SearchRoute::Transfer(record)).unwrap_err();
        assert_eq!(
            err,
            ItineraryError::MissingField {
                index: 0,
                field: "seat class"
            }
        );
    }

    #[test]
    fn leg_keys_are_stable_index_strings() {
        let itinerary =
            normalize(&SearchRoute::Transfer(transfer_record(&[1, 2, 3]))).unwrap();
        let keys: Vec<String> = itinerary.leg_keys().collect();
        assert_eq!(keys, vec!["0", "1", "2"]);
    }
}
