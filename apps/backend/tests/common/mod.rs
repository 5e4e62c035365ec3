//! Common test utilities and fixtures for integration tests.
//!
//! `TestContext::in_memory` needs nothing external. `TestContext::postgres`
//! requires a PostgreSQL database (set DATABASE_URL env var).

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;

use tech_match_backend::db::{Database, MemoryStore, PairStore};
use tech_match_backend::models::Pair;
use tech_match_backend::{build_router, AppState};

/// Test context holding the router under test.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context over an in-memory store holding `pairs`.
    pub fn in_memory(pairs: Vec<Pair>) -> Self {
        Self::from_store(PairStore::Memory(MemoryStore::with_pairs(pairs)))
    }

    /// Create a context over PostgreSQL with an empty pairs table.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn postgres() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        sqlx::query("DELETE FROM pairs")
            .execute(db.pool())
            .await
            .expect("Failed to clear pairs table");

        Self::from_store(PairStore::Postgres(db))
    }

    fn from_store(store: PairStore) -> Self {
        let state = AppState::new(store);
        let app = build_router(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
