use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provenance tag stamped on every response body
pub const CREATOR: &str = "RiiCODE";

/// Uniform JSON wrapper returned by every endpoint except `/health`
///
/// Build it through [`Envelope::success`], [`Envelope::failure`] or
/// [`Envelope::upstream_failure`]: a successful envelope never carries
/// `message`/`error` and a failed one never carries `query`/`results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub creator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl Envelope {
    pub fn success(query: impl Into<String>, results: Value) -> Self {
        Self {
            success: true,
            creator: CREATOR.to_string(),
            message: None,
            query: Some(query.into()),
            results: Some(results),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            creator: CREATOR.to_string(),
            message: Some(message.into()),
            query: None,
            results: None,
            error: None,
        }
    }

    /// Failure carrying the upstream body verbatim
    pub fn upstream_failure(message: impl Into<String>, body: Value) -> Self {
        Self {
            error: Some(body),
            ..Self::failure(message)
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
    pub creator: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            creator: CREATOR.to_string(),
        }
    }
}
