use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Route search query, one origin/destination pair on one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub date: String,
}

/// One station stop on a direct train record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationStop {
    pub station_code: String,
    pub station_name: String,
    pub city: String,
    pub time: String,
}

/// A straight origin-to-destination train, as the search service returns it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectRouteRecord {
    pub train_id: String,
    pub train_name: String,
    pub train_type: String,
    pub departure: StationStop,
    pub arrival: StationStop,
    pub duration: String,
    pub price: i64,
    pub available_seats: i32,
    pub date: String,
}

/// One segment of a transfer route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegRecord {
    pub train_name: String,
    pub category: String,
    pub from: String,
    pub to: String,
    pub duration: String,
    pub price: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub date: String,
}

/// A route requiring one or more transfers.
///
/// `origin`/`destination` are injected by the search service for display;
/// when absent they are recoverable from the first and last leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiLegRouteRecord {
    pub route: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    pub total_duration: String,
    pub transfers: u32,
    pub total_price: i64,
    pub legs: Vec<LegRecord>,
}

/// The two shapes a bookable route arrives in.
///
/// Untagged: the wire format is whichever record the search service produced,
/// and the field sets are disjoint enough to discriminate. Everything
/// downstream of `normalize` sees one shape only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchRoute {
    Direct(DirectRouteRecord),
    Transfer(MultiLegRouteRecord),
}

/// Route search result: direct matches plus transfer alternatives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub direct_routes: Vec<DirectRouteRecord>,
    pub alternative_routes: Vec<MultiLegRouteRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search backend unavailable: {0}")]
    Unavailable(String),
}

/// External route/price search collaborator
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search_routes(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}
