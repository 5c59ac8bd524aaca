use async_trait::async_trait;
use kereta_core::search::{
    DirectRouteRecord, LegRecord, MultiLegRouteRecord, SearchError, SearchRequest, SearchResponse,
    SearchService, StationStop,
};

/// In-memory route catalog standing in for the real search backend.
///
/// Carries the fixture train table and the curated one-transfer alternatives;
/// the real service is a network collaborator with the same interface.
#[derive(Default)]
pub struct RouteCatalog;

impl RouteCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchService for RouteCatalog {
    async fn search_routes(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let origin = normalize_city(&request.origin);
        let destination = normalize_city(&request.destination);

        let direct_routes: Vec<DirectRouteRecord> = trains()
            .into_iter()
            .filter(|train| {
                train.departure.city.to_lowercase().contains(&origin)
                    && train.arrival.city.to_lowercase().contains(&destination)
            })
            .map(|mut train| {
                train.date = request.date.clone();
                train
            })
            .collect();

        let alternative_routes = alternatives(&origin, &destination, &request.date);

        tracing::debug!(
            origin = %request.origin,
            destination = %request.destination,
            direct = direct_routes.len(),
            alternatives = alternative_routes.len(),
            "route search"
        );

        Ok(SearchResponse {
            direct_routes,
            alternative_routes,
        })
    }
}

/// Collapse common city aliases so "jogja" and "Yogyakarta" hit the same routes
fn normalize_city(city: &str) -> String {
    let lowered = city.trim().to_lowercase();
    match lowered.as_str() {
        "jkt" => "jakarta",
        "sby" => "surabaya",
        "yogya" | "jogja" | "jogjakarta" => "yogyakarta",
        "bdg" => "bandung",
        "smg" => "semarang",
        "slo" => "solo",
        "ml" => "malang",
        other => other,
    }
    .to_string()
}

fn stop(code: &str, name: &str, city: &str, time: &str) -> StationStop {
    StationStop {
        station_code: code.to_string(),
        station_name: name.to_string(),
        city: city.to_string(),
        time: time.to_string(),
    }
}

fn train(
    id: &str,
    name: &str,
    class: &str,
    departure: StationStop,
    arrival: StationStop,
    duration: &str,
    price: i64,
    available_seats: i32,
) -> DirectRouteRecord {
    DirectRouteRecord {
        train_id: id.to_string(),
        train_name: name.to_string(),
        train_type: class.to_string(),
        departure,
        arrival,
        duration: duration.to_string(),
        price,
        available_seats,
        date: String::new(),
    }
}

fn trains() -> Vec<DirectRouteRecord> {
    vec![
        train(
            "KAI001",
            "Argo Bromo Anggrek",
            "Executive",
            stop("GMR", "Gambir", "Jakarta", "08:00"),
            stop("SGU", "Surabaya Pasarturi", "Surabaya", "17:00"),
            "9h 0m",
            500_000,
            50,
        ),
        train(
            "KAI002",
            "Gajayana",
            "Executive",
            stop("GMR", "Gambir", "Jakarta", "18:40"),
            stop("ML", "Malang", "Malang", "09:27"),
            "14h 47m",
            650_000,
            30,
        ),
        train(
            "KAI003",
            "Taksaka",
            "Executive",
            stop("GMR", "Gambir", "Jakarta", "20:45"),
            stop("YK", "Yogyakarta", "Yogyakarta", "04:15"),
            "7h 30m",
            480_000,
            20,
        ),
        train(
            "KAI004",
            "Argo Lawu",
            "Executive",
            stop("GMR", "Gambir", "Jakarta", "08:30"),
            stop("SLO", "Solo Balapan", "Solo", "16:45"),
            "8h 15m",
            520_000,
            40,
        ),
        train(
            "KAI005",
            "Jayabaya",
            "Economy",
            stop("PSE", "Pasar Senen", "Jakarta", "16:45"),
            stop("ML", "Malang", "Malang", "07:20"),
            "14h 35m",
            280_000,
            100,
        ),
        train(
            "KAI006",
            "Progo",
            "Economy",
            stop("PSE", "Pasar Senen", "Jakarta", "22:30"),
            stop("LPN", "Lempuyangan", "Yogyakarta", "07:10"),
            "8h 40m",
            180_000,
            15,
        ),
    ]
}

fn leg(
    train_name: &str,
    category: &str,
    from: &str,
    to: &str,
    duration: &str,
    price: i64,
    departure_time: &str,
    arrival_time: &str,
    date: &str,
) -> LegRecord {
    LegRecord {
        train_name: train_name.to_string(),
        category: category.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        duration: duration.to_string(),
        price,
        departure_time: departure_time.to_string(),
        arrival_time: arrival_time.to_string(),
        date: date.to_string(),
    }
}

fn alternatives(origin: &str, destination: &str, date: &str) -> Vec<MultiLegRouteRecord> {
    let mut routes = match (origin, destination) {
        ("jakarta", "surabaya") => vec![MultiLegRouteRecord {
            route: "Jakarta → Cirebon → Surabaya".to_string(),
            origin: None,
            destination: None,
            total_duration: "11h 30m".to_string(),
            transfers: 1,
            total_price: 550_000,
            legs: vec![
                leg(
                    "Argo Cheribon",
                    "Executive",
                    "Jakarta",
                    "Cirebon",
                    "3h 0m",
                    250_000,
                    "08:00",
                    "11:00",
                    date,
                ),
                leg(
                    "Bima",
                    "Executive",
                    "Cirebon",
                    "Surabaya",
                    "8h 30m",
                    300_000,
                    "12:00",
                    "20:30",
                    date,
                ),
            ],
        }],
        ("jakarta", "yogyakarta") => vec![MultiLegRouteRecord {
            route: "Jakarta → Bandung → Yogyakarta".to_string(),
            origin: None,
            destination: None,
            total_duration: "10h 15m".to_string(),
            transfers: 1,
            total_price: 420_000,
            legs: vec![
                leg(
                    "Argo Parahyangan",
                    "Executive",
                    "Jakarta",
                    "Bandung",
                    "3h 15m",
                    150_000,
                    "09:00",
                    "12:15",
                    date,
                ),
                leg(
                    "Lodaya",
                    "Business",
                    "Bandung",
                    "Yogyakarta",
                    "7h 0m",
                    270_000,
                    "13:00",
                    "20:00",
                    date,
                ),
            ],
        }],
        _ => Vec::new(),
    };

    for route in &mut routes {
        route.origin = Some(title_case(origin));
        route.destination = Some(title_case(destination));
    }
    routes
}

fn title_case(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
