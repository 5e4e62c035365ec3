//! Demo pair set for the in-memory store.

use crate::models::{Category, Pair};

const DEMO_PAIRS: &[(&str, &str, Category)] = &[
    ("CLR", "Common Language Runtime", Category::Dotnet),
    ("LINQ", "Language Integrated Query", Category::Dotnet),
    ("NuGet", ".NET package manager", Category::Dotnet),
    ("JVM", "Java Virtual Machine", Category::Java),
    ("Maven", "Java build and dependency tool", Category::Java),
    ("JPA", "Java Persistence API", Category::Java),
    ("S3", "AWS object storage", Category::Cloud),
    ("Lambda", "AWS serverless functions", Category::Cloud),
    ("Blob Storage", "Azure object storage", Category::Cloud),
    ("REST", "Representational State Transfer", Category::Api),
    ("GraphQL", "Query language for APIs", Category::Api),
    ("OAuth 2.0", "Delegated authorization framework", Category::Api),
];

/// Pairs loaded into a fresh in-memory store.
pub fn demo_pairs() -> Vec<Pair> {
    DEMO_PAIRS
        .iter()
        .map(|(term, match_text, category)| Pair::new(*term, *match_text, *category))
        .collect()
}
