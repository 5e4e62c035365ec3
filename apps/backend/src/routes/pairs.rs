//! Pair endpoints

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::Result;
use crate::models::{NewPair, Pair, PairsQuery};
use crate::AppState;

/// GET /api/pairs?category=...
/// Returns the pairs of one category, or every pair for "all"
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PairsQuery>,
) -> Result<Json<Vec<Pair>>> {
    let category = query.category()?;
    let pairs = state.store.list_pairs(category).await?;

    tracing::debug!(%category, count = pairs.len(), "listed pairs");

    Ok(Json(pairs))
}

/// POST /api/pairs
/// Validates and stores one pair
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewPair>, JsonRejection>,
) -> Result<(StatusCode, Json<Pair>)> {
    let Json(payload) = payload?;
    let pair = payload.validate()?;
    let stored = state.store.insert_pair(&pair).await?;

    tracing::info!(term = %stored.term, category = %stored.category, "added pair");

    Ok((StatusCode::CREATED, Json(stored)))
}
