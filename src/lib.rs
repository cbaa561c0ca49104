//! lrc-proxy - API-key gated HTTP proxy for LRCLIB lyrics search
//!
//! A search request runs through a short pipeline: the API key is checked
//! against a static allow-list, the `"<track> - <artist>"` query is split,
//! LRCLIB is asked, and the outcome is wrapped in a uniform JSON envelope.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{parse_query, parse_query_param, ApiKeys};
pub use error::ProxyError;
pub use models::{Envelope, HealthResponse, SearchQuery};
pub use routes::{configure_routes, AppState};
pub use services::{LrclibClient, LrclibError};
