use axum::{extract::State, routing::post, Json, Router};
use kereta_core::search::{SearchRequest, SearchResponse};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search-routes", post(search_routes))
}

/// POST /api/search-routes
async fn search_routes(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let response = state.search.search_routes(&request).await?;
    Ok(Json(response))
}
