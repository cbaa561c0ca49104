use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use lrc_proxy::config::Settings;
use lrc_proxy::routes::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging from `LOG_LEVEL` and `LOG_FORMAT`
fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    match log_format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    init_logging();

    info!("Starting lrc-proxy...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!(
        "Configuration loaded (upstream: {}, {} API keys)",
        settings.lrclib.base_url,
        settings.auth.api_keys.len()
    );

    let app_state = AppState::from_settings(&settings).map_err(|e| {
        error!("Failed to create LRCLIB client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    let host = settings.server.host.clone();
    let port = settings.server.port;

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    info!("Server running on http://{}:{}", host, port);
    info!(
        "Try: http://localhost:{}/api/lr/search?q=Bohemian%20Rhapsody%20-%20Queen&apikey=<key>",
        port
    );

    server.bind((host, port))?.run().await
}
