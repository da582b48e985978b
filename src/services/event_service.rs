// src/services/event_service.rs
// DOCUMENTATION: Business logic behind the proxy routes
// PURPOSE: Validate input, chain upstream calls, hand JSON back to handlers

use crate::config::Config;
use crate::errors::ProxyError;
use crate::models::{SearchQuery, VenueQuery};
use crate::services::geo_hash::encode_location;
use crate::services::geocoding_client::GeocodingClient;
use crate::services::ipinfo_client::IpInfoClient;
use crate::services::ticketmaster_client::{EventSearchParams, TicketmasterClient};
use crate::services::upstream::UpstreamClient;
use serde_json::Value;

/// Event service
/// DOCUMENTATION: Stateless; every call works from the config and client it is handed
pub struct EventService;

impl EventService {
    /// Location search pipeline
    /// DOCUMENTATION: validate -> geocode -> geohash -> segment lookup -> event search.
    /// Each step feeds the next; any failure aborts the whole request.
    pub async fn search_events(
        http: &UpstreamClient,
        config: &Config,
        query: &SearchQuery,
    ) -> Result<Value, ProxyError> {
        if let Some(message) = query.first_violation() {
            log::warn!("Rejected event search: {}", message);
            return Err(ProxyError::Validation(message));
        }

        let geocoder = GeocodingClient::from_config(http, config)?;
        let ticketmaster = TicketmasterClient::from_config(http, config)?;

        let location = geocoder
            .geocode(&query.location)
            .await?
            .ok_or_else(|| ProxyError::Validation("Location not found".to_string()))?;

        let geo_point = encode_location(location)?;

        let search = EventSearchParams {
            keyword: &query.keyword,
            geo_point: &geo_point,
            radius: &query.distance,
            segment_id: query.segment_id(),
        };

        log::info!(
            "Searching events: geoPoint={}, radius={}, category={}",
            geo_point,
            query.distance,
            query.category
        );

        ticketmaster.search_events(&search).await
    }

    /// Event detail lookup
    pub async fn get_event(
        http: &UpstreamClient,
        config: &Config,
        event_id: &str,
    ) -> Result<Value, ProxyError> {
        TicketmasterClient::from_config(http, config)?
            .get_event(event_id)
            .await
    }

    /// Venue search
    pub async fn search_venues(
        http: &UpstreamClient,
        config: &Config,
        query: &VenueQuery,
    ) -> Result<Value, ProxyError> {
        TicketmasterClient::from_config(http, config)?
            .search_venues(&query.keyword)
            .await
    }

    /// IP geolocation passthrough
    pub async fn ip_info(http: &UpstreamClient, config: &Config) -> Result<Value, ProxyError> {
        IpInfoClient::from_config(http, config)?.lookup().await
    }
}
