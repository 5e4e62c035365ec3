//! In-memory pair repository, used when no database is configured

use tokio::sync::RwLock;

use crate::models::{Category, Pair};

#[derive(Default)]
pub struct MemoryStore {
    pairs: RwLock<Vec<Pair>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pairs(pairs: Vec<Pair>) -> Self {
        Self {
            pairs: RwLock::new(pairs),
        }
    }

    pub async fn list_pairs(&self, category: Category) -> Vec<Pair> {
        self.pairs
            .read()
            .await
            .iter()
            .filter(|p| category.includes(p.category))
            .cloned()
            .collect()
    }

    pub async fn insert_pair(&self, pair: &Pair) -> Pair {
        self.pairs.write().await.push(pair.clone());
        pair.clone()
    }

    pub async fn count(&self, category: Category) -> usize {
        self.pairs
            .read()
            .await
            .iter()
            .filter(|p| category.includes(p.category))
            .count()
    }
}
