//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use tech_match_backend::models::{Category, Pair};

/// A small pair set spanning two categories.
pub fn sample_pairs() -> Vec<Pair> {
    vec![
        Pair::new("JVM", "Java Virtual Machine", Category::Java),
        Pair::new("JAR", "Java Archive", Category::Java),
        Pair::new("CLR", "Common Language Runtime", Category::Dotnet),
    ]
}

/// Create an add-pair request body.
pub fn new_pair_request(term: &str, match_text: &str, category: &str) -> serde_json::Value {
    json!({ "term": term, "match": match_text, "category": category })
}
