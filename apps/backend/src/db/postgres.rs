//! PostgreSQL pair repository

use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::error::{ApiError, Result};
use crate::models::{Category, DbPair, Pair};

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// List pairs in insertion order, optionally filtered by category
    pub async fn list_pairs(&self, category: Category) -> Result<Vec<Pair>> {
        let rows = match category {
            Category::All => {
                sqlx::query_as::<_, DbPair>(
                    r#"
                    SELECT id, term, match_text, category, created_at
                    FROM pairs
                    ORDER BY seq
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
            other => {
                sqlx::query_as::<_, DbPair>(
                    r#"
                    SELECT id, term, match_text, category, created_at
                    FROM pairs
                    WHERE category = $1
                    ORDER BY seq
                    "#,
                )
                .bind(other.as_str())
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(DbPair::to_pair).collect()
    }

    /// Insert a validated pair
    pub async fn insert_pair(&self, pair: &Pair) -> Result<Pair> {
        let row = DbPair::from_pair(pair);
        let stored = sqlx::query_as::<_, DbPair>(
            r#"
            INSERT INTO pairs (id, term, match_text, category, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, term, match_text, category, created_at
            "#,
        )
        .bind(row.id)
        .bind(&row.term)
        .bind(&row.match_text)
        .bind(&row.category)
        .bind(row.created_at)
        .fetch_one(&self.pool)
        .await?;

        stored.to_pair()
    }

    /// Number of pairs per stored category name
    pub async fn count_by_category(&self) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT category, COUNT(*) AS pair_count
            FROM pairs
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| (row.get("category"), row.get("pair_count")))
            .collect())
    }
}
