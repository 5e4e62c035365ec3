pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::db::{Database, MemoryStore, PairStore};
use crate::services::seed::demo_pairs;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PairStore>,
}

impl AppState {
    pub fn new(store: PairStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the API router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/pairs",
            get(routes::pairs::list).post(routes::pairs::create),
        )
        .route("/api/categories", get(routes::categories::list))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the store named by the configuration
pub async fn open_store(config: &ServerConfig) -> anyhow::Result<PairStore> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url).await?;

            tracing::info!("Running migrations...");
            db.run_migrations().await?;

            Ok(PairStore::Postgres(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, pairs are kept in memory");
            let store = if config.seed_demo_pairs {
                MemoryStore::with_pairs(demo_pairs())
            } else {
                MemoryStore::new()
            };
            Ok(PairStore::Memory(store))
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let store = open_store(&config).await?;
    tracing::info!(store = store.kind(), "Pair store ready");

    let app = build_router(AppState::new(store));

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let app = build_router(AppState::new(PairStore::Memory(MemoryStore::new())));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_open_store_without_database_seeds_memory() {
        let store = open_store(&ServerConfig::default()).await.unwrap();
        assert_eq!(store.kind(), "memory");
        assert_eq!(
            store.list_pairs(models::Category::All).await.unwrap().len(),
            demo_pairs().len()
        );

        let empty = open_store(&ServerConfig {
            seed_demo_pairs: false,
            ..ServerConfig::default()
        })
        .await
        .unwrap();
        assert!(empty.list_pairs(models::Category::All).await.unwrap().is_empty());
    }
}
