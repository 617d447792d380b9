//! HTTP client for the Sanity content store.
//!
//! Queries go through the HTTP query API:
//! `GET https://{project}.api.sanity.io/v{version}/data/query/{dataset}`
//! with the GROQ string in the `query` parameter and query parameters
//! like `$slug` passed as JSON-encoded values. Responses arrive wrapped
//! in a `result` envelope.

use std::time::Duration;

use async_trait::async_trait;
use devlog_core::{AppError, ContentStoreConfig, Devlog};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::queries;
use crate::store::ContentStore;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Envelope around every query response.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    #[serde(default)]
    result: Option<T>,
}

/// Client for the Sanity HTTP query API.
#[derive(Clone, Debug)]
pub struct SanityClient {
    client: Client,
    base_url: String,
    dataset: String,
    api_token: Option<String>,
}

impl SanityClient {
    pub fn new(config: &ContentStoreConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: query_base_url(config),
            dataset: config.dataset.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn query_url(&self) -> String {
        format!("{}/data/query/{}", self.base_url, self.dataset)
    }

    /// Run a GROQ query with optional `$name` parameters and unwrap the
    /// response envelope.
    async fn fetch<T: DeserializeOwned + Default>(
        &self,
        query: String,
        params: &[(&str, String)],
    ) -> Result<Option<T>, AppError> {
        let mut request = self
            .client
            .get(self.query_url())
            .query(&[("query", query.as_str())])
            .query(params);

        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ContentStore(format!("Query request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ContentStore(format!(
                "Query returned {}: {}",
                status, body
            )));
        }

        let envelope: QueryResponse<T> = response
            .json()
            .await
            .map_err(|e| AppError::ContentStore(format!("Invalid query response: {}", e)))?;

        Ok(envelope.result)
    }
}

/// Base URL for the query API. `use_cdn` selects the cached edge host
/// for faster public reads.
fn query_base_url(config: &ContentStoreConfig) -> String {
    let host = if config.use_cdn {
        "apicdn.sanity.io"
    } else {
        "api.sanity.io"
    };
    format!("https://{}.{}/v{}", config.project_id, host, config.api_version)
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn list_devlogs(&self) -> Result<Vec<Devlog>, AppError> {
        let result = self
            .fetch::<Vec<Devlog>>(queries::published_devlogs(), &[])
            .await?;
        // A null result reads as "no published entries".
        Ok(result.unwrap_or_default())
    }

    async fn devlog_by_slug(&self, slug: &str) -> Result<Option<Devlog>, AppError> {
        // Query parameters are JSON-encoded values on the wire.
        let encoded = serde_json::to_string(slug)
            .map_err(|e| AppError::InvalidInput(format!("Invalid slug: {}", e)))?;
        self.fetch(queries::devlog_by_slug(), &[("$slug", encoded)])
            .await
    }
}
