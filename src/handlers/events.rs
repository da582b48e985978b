// src/handlers/events.rs
// DOCUMENTATION: HTTP handlers for event and venue lookups
// PURPOSE: Parse requests, call services, return upstream JSON

use crate::config::Config;
use crate::errors::ProxyError;
use crate::models::{SearchQuery, VenueQuery};
use crate::services::{EventService, UpstreamClient};
use crate::handlers::query::FirstValueQuery;
use actix_web::{web, HttpResponse, Responder};

/// GET /search
/// Geocode the location and search events around it
pub async fn search_events(
    config: web::Data<Config>,
    http: web::Data<UpstreamClient>,
    query: FirstValueQuery<SearchQuery>,
) -> Result<impl Responder, ProxyError> {
    let result = EventService::search_events(http.get_ref(), config.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /event/{event_id}
/// Fetch one event by its Ticketmaster id
pub async fn get_event(
    config: web::Data<Config>,
    http: web::Data<UpstreamClient>,
    path: web::Path<String>,
) -> Result<impl Responder, ProxyError> {
    let event_id = path.into_inner();
    let result = EventService::get_event(http.get_ref(), config.get_ref(), &event_id).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /venue
/// Search venues by keyword
pub async fn search_venues(
    config: web::Data<Config>,
    http: web::Data<UpstreamClient>,
    query: FirstValueQuery<VenueQuery>,
) -> Result<impl Responder, ProxyError> {
    let result = EventService::search_venues(http.get_ref(), config.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Configuration for event routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::get().to(search_events))
        .route("/event/{event_id}", web::get().to(get_event))
        .route("/venue", web::get().to(search_venues));
}
