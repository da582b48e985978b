// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Report service status and which upstream credentials are loaded

use crate::config::Config;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

const SERVICE_NAME: &str = "event-finder-proxy";

/// GET /health
/// Credentials are reported as present/absent only, never their values
pub async fn health_check(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "environment": config.environment,
        "upstreams": {
            "ticketmaster": config.ticketmaster_api_key.is_some(),
            "geocoding": config.google_api_key.is_some(),
            "ipinfo": config.ipinfo_token.is_some()
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
