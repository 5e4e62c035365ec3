//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{ApiError, Result};

// Re-export shared types from pairing-core
pub use pairing_core::types::{Category, NewPair, Pair};

// === Database Entity Types ===

/// Pair stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPair {
    pub id: Uuid,
    pub term: String,
    pub match_text: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl DbPair {
    /// Create a new row for a validated pair
    pub fn from_pair(pair: &Pair) -> Self {
        Self {
            id: Uuid::new_v4(),
            term: pair.term.clone(),
            match_text: pair.match_text.clone(),
            category: pair.category.as_str().to_string(),
            created_at: Utc::now(),
        }
    }

    /// Convert to API pair type
    pub fn to_pair(&self) -> Result<Pair> {
        let category = Category::parse(&self.category).map_err(|_| {
            ApiError::Internal(format!(
                "pair {} has unknown category {:?}",
                self.id, self.category
            ))
        })?;

        Ok(Pair {
            term: self.term.clone(),
            match_text: self.match_text.clone(),
            category,
        })
    }
}

// === API Request/Response Types ===

/// Query string for GET /api/pairs
#[derive(Debug, Default, Deserialize)]
pub struct PairsQuery {
    pub category: Option<String>,
}

impl PairsQuery {
    /// Requested filter; a missing or blank parameter means all pairs.
    pub fn category(&self) -> Result<Category> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(Category::All),
            Some(raw) => {
                Category::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
            }
        }
    }
}

/// Pair count for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: String,
    pub pair_count: usize,
}

/// Response for GET /api/categories
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryCount>,
}
