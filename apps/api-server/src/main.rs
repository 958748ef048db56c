//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use middleware::error::json_error_handler;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state, applying the one-time seed load
    let state = AppState::bootstrap(&config.seed_file).await;

    let allowed_origins = config.cors_allowed_origins.clone();

    // Start HTTP server; Actix handles SIGTERM/SIGINT with graceful shutdown
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(build_cors(&allowed_origins))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn build_cors(allowed_origins: &str) -> Cors {
    let mut cors = Cors::default();

    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }

    cors.allow_any_method().allow_any_header().max_age(3600)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,quill_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
