// src/handlers/ipinfo.rs
// DOCUMENTATION: IP geolocation passthrough
// PURPOSE: Keep the IPInfo token on the server

use crate::config::Config;
use crate::errors::ProxyError;
use crate::services::{EventService, UpstreamClient};
use actix_web::{web, HttpResponse, Responder};

/// GET /ipinfo
pub async fn ipinfo(
    config: web::Data<Config>,
    http: web::Data<UpstreamClient>,
) -> Result<impl Responder, ProxyError> {
    let result = EventService::ip_info(http.get_ref(), config.get_ref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/ipinfo", web::get().to(ipinfo));
}
