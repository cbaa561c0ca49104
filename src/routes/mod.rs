// Route exports
pub mod health;
pub mod search;

use actix_web::{web, HttpResponse};

use crate::models::Envelope;

pub use search::AppState;

/// Register every route plus the JSON catch-all.
///
/// Known paths answer `GET` and `HEAD`; any other method falls through to
/// the catch-all, so a `POST /health` is a 404 rather than a 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/lr/search")
            .route(web::get().to(search::search))
            .route(web::head().to(search::search))
            .default_service(web::to(not_found)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health::health_check))
            .route(web::head().to(health::health_check))
            .default_service(web::to(not_found)),
    )
    .default_service(web::to(not_found));
}

/// Catch-all for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(Envelope::failure("Endpoint not found"))
}
