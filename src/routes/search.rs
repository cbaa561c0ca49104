use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::config::Settings;
use crate::core::{parse_query_param, ApiKeys};
use crate::error::ProxyError;
use crate::models::{Envelope, SearchParams};
use crate::services::{LrclibClient, LrclibError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub lrclib: Arc<LrclibClient>,
    pub api_keys: Arc<ApiKeys>,
}

impl AppState {
    pub fn new(lrclib: LrclibClient, api_keys: ApiKeys) -> Self {
        Self {
            lrclib: Arc::new(lrclib),
            api_keys: Arc::new(api_keys),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, LrclibError> {
        Ok(Self::new(
            LrclibClient::from_settings(&settings.lrclib)?,
            ApiKeys::new(settings.auth.api_keys.iter().cloned()),
        ))
    }
}

/// Lyrics search endpoint
///
/// GET /api/lr/search?q={track} - {artist}&apikey={key}
///
/// Runs key check, query parsing and the LRCLIB lookup in order and stops at
/// the first failure.
pub async fn search(
    state: web::Data<AppState>,
    pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ProxyError> {
    let params = SearchParams::from_pairs(pairs.into_inner());

    state.api_keys.validate_param(&params.apikey)?;
    let query = parse_query_param(&params.q)?;

    tracing::info!(
        "Searching lyrics: track={:?}, artist={:?}",
        query.track_name,
        query.artist_name
    );

    let results = state.lrclib.search(&query).await?;

    Ok(HttpResponse::Ok().json(Envelope::success(query.raw, results)))
}
