use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::Value;
use thiserror::Error;

use crate::models::Envelope;
use crate::services::LrclibError;

/// Terminal outcome of a search request that did not succeed
///
/// Every variant renders as an [`Envelope`] with `success: false`; none are
/// retried.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("API key is required")]
    Unauthorized,

    #[error("Invalid API key")]
    Forbidden,

    #[error("{0}")]
    BadRequest(String),

    #[error("LRCLIB returned {status}")]
    Upstream { status: u16, body: Value },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    pub fn missing_query() -> Self {
        ProxyError::BadRequest(r#"Query parameter "q" is required"#.to_string())
    }

    /// The caller-facing envelope. Internal details never leave the process.
    pub fn envelope(&self) -> Envelope {
        match self {
            ProxyError::Unauthorized | ProxyError::Forbidden => Envelope::failure(self.to_string()),
            ProxyError::BadRequest(message) => Envelope::failure(message.clone()),
            ProxyError::Upstream { body, .. } => {
                Envelope::upstream_failure("Error from LRCLIB API", body.clone())
            }
            ProxyError::Internal(_) => Envelope::failure("Internal server error"),
        }
    }
}

impl From<LrclibError> for ProxyError {
    fn from(err: LrclibError) -> Self {
        match err {
            LrclibError::Status { status, body } => ProxyError::Upstream { status, body },
            other => ProxyError::Internal(other.to_string()),
        }
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Unauthorized => StatusCode::UNAUTHORIZED,
            ProxyError::Forbidden => StatusCode::FORBIDDEN,
            ProxyError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ProxyError::Internal(cause) => tracing::error!("Search failed: {}", cause),
            ProxyError::Upstream { status, .. } => {
                tracing::warn!("LRCLIB responded with status {}", status)
            }
            _ => {}
        }

        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}
