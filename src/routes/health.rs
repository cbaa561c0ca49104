use actix_web::{HttpResponse, Responder};

use crate::models::HealthResponse;

/// Liveness probe. Does not touch LRCLIB.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}
