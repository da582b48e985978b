// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, outbound HTTP client, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;
#[cfg(test)]
mod test_support;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::UpstreamClient;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting event finder proxy...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the shared outbound client
    let upstream = match UpstreamClient::new(config.upstream_timeout()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "Upstream timeout: {}s",
        config.upstream_timeout_secs
    );

    // 5. Start HTTP server
    let server_addr = (config.server_address.clone(), config.server_port);
    let config = web::Data::new(config);
    let upstream = web::Data::new(upstream);

    HttpServer::new(move || {
        App::new()
            // Application state (config and outbound client)
            .app_data(config.clone())
            .app_data(upstream.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::index_config)
            .configure(handlers::health_config)
            .configure(handlers::ipinfo_config)
            .configure(handlers::events_config)
    })
    .bind(server_addr)?
    .run()
    .await
}
