// src/services/geocoding_client.rs
// DOCUMENTATION: Google Geocoding API client
// PURPOSE: Resolve a free-text location to coordinates

use crate::config::Config;
use crate::errors::ProxyError;
use crate::models::{GeocodeResponse, LatLng};
use crate::services::upstream::{parse_url, UpstreamClient};

/// Google Geocoding API client
/// DOCUMENTATION: Borrows the shared HTTP client for the duration of a request
pub struct GeocodingClient<'a> {
    /// HTTP client for making requests
    http: &'a UpstreamClient,
    /// Google API key
    api_key: &'a str,
    /// Geocoding endpoint
    url: &'a str,
}

impl<'a> GeocodingClient<'a> {
    /// Create a client from application configuration
    /// DOCUMENTATION: Fails when GOOGLE_API_KEY is not configured
    pub fn from_config(http: &'a UpstreamClient, config: &'a Config) -> Result<Self, ProxyError> {
        let api_key = config
            .google_api_key
            .as_deref()
            .ok_or_else(|| ProxyError::Configuration("Missing Google API key".to_string()))?;

        Ok(Self {
            http,
            api_key,
            url: &config.geocode_url,
        })
    }

    /// Geocode an address
    /// DOCUMENTATION: Returns the first match's coordinates.
    /// Ok(None) means the geocoder returned no results.
    pub async fn geocode(&self, address: &str) -> Result<Option<LatLng>, ProxyError> {
        let params = [("address", address), ("key", self.api_key)];

        let response: GeocodeResponse = self.http.get_json(parse_url(self.url)?, &params).await?;

        if !response.has_results() {
            log::info!(
                "Geocoder found no results (status={}, message={})",
                response.status.as_deref().unwrap_or("unknown"),
                response.error_message.as_deref().unwrap_or("-")
            );
        }

        response.first_location().map_err(ProxyError::Upstream)
    }
}
