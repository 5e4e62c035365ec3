//! Common test utilities: a real pairs API on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use pairing_core::{Category, Pair};
use tech_match_backend::db::{MemoryStore, PairStore};
use tech_match_backend::{build_router, AppState};

/// Serve an in-memory pairs API holding `pairs`; returns its base URL.
pub async fn spawn_backend(pairs: Vec<Pair>) -> String {
    serve(build_router(AppState::new(PairStore::Memory(
        MemoryStore::with_pairs(pairs),
    ))))
    .await
}

/// Serve `pairs` read-only, answering requests for `slow` after `delay`.
pub async fn spawn_slow_backend(pairs: Vec<Pair>, slow: Category, delay: Duration) -> String {
    let pairs = Arc::new(pairs);
    let app = Router::new().route(
        "/api/pairs",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let pairs = Arc::clone(&pairs);
            async move {
                let category = params
                    .get("category")
                    .and_then(|raw| Category::parse(raw).ok())
                    .unwrap_or(Category::All);
                if category == slow {
                    tokio::time::sleep(delay).await;
                }
                let listed: Vec<Pair> = pairs
                    .iter()
                    .filter(|p| category.includes(p.category))
                    .cloned()
                    .collect();
                Json(listed)
            }
        }),
    );
    serve(app).await
}

/// Serve an API that accepts every new pair but fails every listing.
pub async fn spawn_failing_list_backend(accepted: Pair) -> String {
    let app = Router::new().route(
        "/api/pairs",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "database_error",
                    "message": "Database error: connection refused"
                })),
            )
        })
        .post(move || {
            let accepted = accepted.clone();
            async move { (StatusCode::CREATED, Json(accepted)) }
        }),
    );
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    format!("http://{}", addr)
}

pub fn sample_pairs() -> Vec<Pair> {
    vec![
        Pair::new("JVM", "Java Virtual Machine", Category::Java),
        Pair::new("JAR", "Java Archive", Category::Java),
        Pair::new("REST", "Representational State Transfer", Category::Api),
    ]
}
