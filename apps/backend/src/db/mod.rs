//! Pair storage backends

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::Database;

use crate::error::Result;
use crate::models::{Category, CategoryCount, Pair};

/// Storage behind the pairs API.
pub enum PairStore {
    Postgres(Database),
    Memory(MemoryStore),
}

impl PairStore {
    /// Short backend name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// List pairs matching `category` in insertion order.
    pub async fn list_pairs(&self, category: Category) -> Result<Vec<Pair>> {
        match self {
            Self::Postgres(db) => db.list_pairs(category).await,
            Self::Memory(store) => Ok(store.list_pairs(category).await),
        }
    }

    /// Store a validated pair.
    pub async fn insert_pair(&self, pair: &Pair) -> Result<Pair> {
        match self {
            Self::Postgres(db) => db.insert_pair(pair).await,
            Self::Memory(store) => Ok(store.insert_pair(pair).await),
        }
    }

    /// Pair counts for every concrete category, zero included.
    pub async fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        let mut counts = Vec::with_capacity(Category::CONCRETE.len());

        match self {
            Self::Postgres(db) => {
                let rows = db.count_by_category().await?;
                for category in Category::CONCRETE {
                    let pair_count = rows
                        .iter()
                        .find(|(name, _)| name == category.as_str())
                        .map(|(_, n)| *n as usize)
                        .unwrap_or(0);
                    counts.push(count_entry(category, pair_count));
                }
            }
            Self::Memory(store) => {
                for category in Category::CONCRETE {
                    counts.push(count_entry(category, store.count(category).await));
                }
            }
        }

        Ok(counts)
    }
}

fn count_entry(category: Category, pair_count: usize) -> CategoryCount {
    CategoryCount {
        category,
        label: category.label().to_string(),
        pair_count,
    }
}
