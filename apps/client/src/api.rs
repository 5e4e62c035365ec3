//! HTTP client for the pairs API.

use pairing_core::{Category, NewPair, PairError, Pair};
use reqwest::{Client, Response};
use std::sync::Arc;

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid pair: {0}")]
    Invalid(#[from] PairError),
}

struct PairsClientInner {
    client: Client,
    backend_url: String,
}

/// Client for `/api/pairs`. Cheap to clone.
#[derive(Clone)]
pub struct PairsClient {
    inner: Arc<PairsClientInner>,
}

impl PairsClient {
    pub fn new(backend_url: &str) -> Self {
        Self {
            inner: Arc::new(PairsClientInner {
                client: Client::new(),
                backend_url: backend_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.inner.backend_url
    }

    /// Check if backend is reachable.
    pub async fn check_connectivity(&self) -> Result<bool, ClientError> {
        let url = format!("{}/health", self.inner.backend_url);
        match self.inner.client.get(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) => Err(ClientError::Network(e.to_string())),
        }
    }

    /// Fetch the pairs of one category ("all" for every pair).
    pub async fn fetch_pairs(&self, category: Category) -> Result<Vec<Pair>, ClientError> {
        let url = format!("{}/api/pairs", self.inner.backend_url);

        let resp = self
            .inner
            .client
            .get(&url)
            .query(&[("category", category.as_str())])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let resp = ensure_success(resp).await?;

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Validate and submit a new pair. Returns the pair as stored.
    pub async fn add_pair(&self, new_pair: &NewPair) -> Result<Pair, ClientError> {
        let pair = new_pair.validate()?;
        let url = format!("{}/api/pairs", self.inner.backend_url);

        let resp = self
            .inner
            .client
            .post(&url)
            .json(&pair)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let resp = ensure_success(resp).await?;

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let message = resp.text().await.unwrap_or_default();
    Err(ClientError::Backend { status, message })
}
