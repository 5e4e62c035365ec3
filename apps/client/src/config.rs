//! Client configuration from environment variables.

use pairing_core::Category;
use std::time::Duration;

/// Settings for the terminal game.
///
/// Env vars:
/// - TECH_MATCH_URL: pairs API base URL (default "http://localhost:3000")
/// - MISMATCH_DELAY_MS: how long a mismatched pair stays selected (default 1000)
/// - TECH_MATCH_CATEGORY: category shown at startup (default "all")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub backend_url: String,
    pub mismatch_delay: Duration,
    pub category: Category,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000".to_string(),
            mismatch_delay: Duration::from_millis(1000),
            category: Category::All,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mismatch_delay = match lookup("MISMATCH_DELAY_MS") {
            Some(raw) => {
                let millis: u64 = raw.trim().parse().map_err(|_| {
                    anyhow::anyhow!("MISMATCH_DELAY_MS must be milliseconds, got {:?}", raw)
                })?;
                Duration::from_millis(millis)
            }
            None => defaults.mismatch_delay,
        };

        let category = match lookup("TECH_MATCH_CATEGORY") {
            Some(raw) => Category::parse(&raw)?,
            None => defaults.category,
        };

        Ok(Self {
            backend_url: lookup("TECH_MATCH_URL").unwrap_or(defaults.backend_url),
            mismatch_delay,
            category,
        })
    }
}
