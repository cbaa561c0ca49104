use crate::config::LrclibSettings;
use crate::models::SearchQuery;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to LRCLIB
#[derive(Debug, Error)]
pub enum LrclibError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// LRCLIB answered with a non-2xx status
    #[error("API returned {status}")]
    Status { status: u16, body: Value },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// LRCLIB search API client
///
/// Issues a single `GET /api/search` per lookup. There is no retry and, unless
/// configured, no timeout: a failure is reported to the caller immediately.
pub struct LrclibClient {
    base_url: String,
    client: Client,
}

impl LrclibClient {
    /// Create a client with the transport defaults
    pub fn new(base_url: &str) -> Result<Self, LrclibError> {
        Self::build(base_url, &default_user_agent(), None)
    }

    pub fn from_settings(settings: &LrclibSettings) -> Result<Self, LrclibError> {
        let user_agent = settings
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);

        Self::build(&settings.base_url, &user_agent, settings.timeout())
    }

    fn build(base_url: &str, user_agent: &str, timeout: Option<Duration>) -> Result<Self, LrclibError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search LRCLIB for a track, optionally narrowed by artist.
    ///
    /// Returns the response body untouched on success. A non-2xx answer
    /// becomes [`LrclibError::Status`] with the body as LRCLIB sent it.
    pub async fn search(&self, query: &SearchQuery) -> Result<Value, LrclibError> {
        let url = format!("{}/api/search", self.base_url);
        let params = query.upstream_params();

        tracing::debug!("Searching LRCLIB with params: {:?}", params);

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(LrclibError::Status {
                status: status.as_u16(),
                body: parse_body(text),
            });
        }

        let text = response.text().await?;
        let results: Value = serde_json::from_str(&text)
            .map_err(|e| LrclibError::InvalidResponse(format!("Failed to parse search results: {}", e)))?;

        tracing::debug!(
            "LRCLIB returned {} results for {:?}",
            results.as_array().map_or(0, Vec::len),
            query.raw
        );

        Ok(results)
    }
}

fn default_user_agent() -> String {
    format!("lrc-proxy v{}", env!("CARGO_PKG_VERSION"))
}

/// Error bodies are relayed as JSON when they are JSON, otherwise as a string
fn parse_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
