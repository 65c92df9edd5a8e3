//! Lyra - a lightweight, self-hosted music player service.
//!
//! Lyra serves the player view shell, a JSON API over the central player
//! state store, and a statically cached user profile endpoint.

mod api;
mod config;
mod error;
mod models;
mod routes;
mod store;

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;
use crate::error::AppError;
use crate::routes::RouteTable;
use crate::store::PlayerStore;

/// Initialize the tracing/logging subsystem.
fn init_tracing(config: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Json => {
            subscriber
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            subscriber
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

/// Configure CORS based on application config.
fn configure_cors(config: &config::Config) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    if config.cors_origins.len() == 1 && config.cors_origins[0] == "*" {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.cors_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Graceful shutdown handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize configuration
    let config = config::init();

    // Initialize logging
    init_tracing(config);

    // Validate configuration
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }

    // The store lives for the whole session and is shared by handle.
    let store = Arc::new(PlayerStore::new());
    store.subscribe(|event| {
        tracing::trace!(event = ?event, "store mutation");
    });
    let store_data = web::Data::from(store);

    let bind_address = config.bind_address();

    tracing::info!(
        address = %bind_address,
        base_path = %config.base_path,
        "Starting Lyra server"
    );

    // Create and start server
    let server = HttpServer::new(move || {
        let route_table = RouteTable::new(config.base_path.clone());
        App::new()
            // Middleware (order matters - outermost first)
            .wrap(TracingLogger::default())
            .wrap(configure_cors(config))
            // Shared state
            .app_data(store_data.clone())
            // Surface body-parse failures as structured errors
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(err.to_string()).into()
            }))
            // Health endpoint
            .configure(api::health::configure)
            // Static user endpoint
            .configure(api::user::configure)
            // Player state endpoints
            .configure(api::player::configure)
            // View routes
            .configure(|cfg| route_table.configure(cfg))
    })
    .bind(&bind_address)?
    .shutdown_timeout(30)
    .run();

    // Run server with graceful shutdown
    tokio::select! {
        result = server => {
            result
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown complete");
            Ok(())
        }
    }
}
