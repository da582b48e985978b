// src/services/ticketmaster_client.rs
// DOCUMENTATION: Ticketmaster Discovery API client
// PURPOSE: Event search, event lookup and venue search

use crate::config::Config;
use crate::errors::ProxyError;
use crate::services::upstream::{join_segments, UpstreamClient};
use serde_json::Value;

/// Distance unit sent with every event search
pub const RADIUS_UNIT: &str = "miles";

/// Parameters for a Discovery API event search
#[derive(Debug, Clone, PartialEq)]
pub struct EventSearchParams<'a> {
    pub keyword: &'a str,
    /// Geohash of the search centre
    pub geo_point: &'a str,
    /// Radius, passed through as given
    pub radius: &'a str,
    /// Segment filter; None leaves the parameter out entirely
    pub segment_id: Option<&'a str>,
}

/// Ticketmaster Discovery API client
/// DOCUMENTATION: Responses are returned as raw JSON, unmodified
pub struct TicketmasterClient<'a> {
    /// HTTP client for making requests
    http: &'a UpstreamClient,
    /// Discovery API key
    api_key: &'a str,
    /// Base URL for the Discovery API
    base_url: &'a str,
}

impl<'a> TicketmasterClient<'a> {
    /// Create a client from application configuration
    /// DOCUMENTATION: Fails when TICKETMASTER_API_KEY is not configured
    pub fn from_config(http: &'a UpstreamClient, config: &'a Config) -> Result<Self, ProxyError> {
        let api_key = config
            .ticketmaster_api_key
            .as_deref()
            .ok_or_else(|| ProxyError::Configuration("Missing Ticketmaster API key".to_string()))?;

        Ok(Self {
            http,
            api_key,
            base_url: &config.ticketmaster_base_url,
        })
    }

    /// Search events near a geohash
    pub async fn search_events(&self, search: &EventSearchParams<'_>) -> Result<Value, ProxyError> {
        log::debug!(
            "Ticketmaster event search: geoPoint={}, radius={}, segment={:?}",
            search.geo_point,
            search.radius,
            search.segment_id
        );

        let url = join_segments(self.base_url, &["events.json"])?;
        self.http.get_json(url, &self.search_params(search)).await
    }

    /// Fetch a single event by its Discovery API id
    pub async fn get_event(&self, event_id: &str) -> Result<Value, ProxyError> {
        log::debug!("Ticketmaster event lookup: id={}", event_id);

        let url = join_segments(self.base_url, &["events", event_id])?;
        self.http.get_json(url, &[("apikey", self.api_key)]).await
    }

    /// Search venues by keyword
    pub async fn search_venues(&self, keyword: &str) -> Result<Value, ProxyError> {
        log::debug!("Ticketmaster venue search: keyword={}", keyword);

        let url = join_segments(self.base_url, &["venues"])?;
        self.http
            .get_json(url, &[("apikey", self.api_key), ("keyword", keyword)])
            .await
    }

    /// Build the event search query string
    fn search_params<'p>(&'p self, search: &'p EventSearchParams<'_>) -> Vec<(&'static str, &'p str)> {
        let mut params = vec![
            ("apikey", self.api_key),
            ("keyword", search.keyword),
            ("geoPoint", search.geo_point),
            ("radius", search.radius),
            ("unit", RADIUS_UNIT),
        ];

        if let Some(segment_id) = search.segment_id {
            params.push(("segmentId", segment_id));
        }

        params
    }
}
