//! Category endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::CategoryListResponse;
use crate::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> Result<Json<CategoryListResponse>> {
    let categories = state.store.category_counts().await?;
    Ok(Json(CategoryListResponse { categories }))
}
