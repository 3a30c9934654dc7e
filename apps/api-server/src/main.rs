//! # Alumnet API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use alumnet_core::ports::{PasswordService, TokenService};
use alumnet_infra::{Argon2PasswordService, JwtTokenService};

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&telemetry::TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Alumnet API Server on {}:{}",
        config.host,
        config.port
    );

    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

    let state = AppState::new(config.database.as_ref()).await;

    if let Some(admin) = &config.admin {
        if let Err(e) = state.bootstrap_admin(admin, password_service.as_ref()).await {
            tracing::error!("Failed to provision admin account: {}", e);
        }
    }

    let token_data = web::Data::new(token_service);
    let password_data = web::Data::new(password_service);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .app_data(token_data.clone())
            .app_data(password_data.clone())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
