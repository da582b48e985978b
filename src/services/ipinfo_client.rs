// src/services/ipinfo_client.rs
// DOCUMENTATION: IPInfo API client
// PURPOSE: Look up the geolocation of the server's public address

use crate::config::Config;
use crate::errors::ProxyError;
use crate::services::upstream::{parse_url, UpstreamClient};
use serde_json::Value;

/// IPInfo API client
pub struct IpInfoClient<'a> {
    http: &'a UpstreamClient,
    token: &'a str,
    url: &'a str,
}

impl<'a> IpInfoClient<'a> {
    /// Create a client from application configuration
    /// DOCUMENTATION: Fails before any request is made when IPINFO_KEY is not configured
    pub fn from_config(http: &'a UpstreamClient, config: &'a Config) -> Result<Self, ProxyError> {
        let token = config
            .ipinfo_token
            .as_deref()
            .ok_or_else(|| ProxyError::Configuration("Missing IPInfo token".to_string()))?;

        Ok(Self {
            http,
            token,
            url: &config.ipinfo_url,
        })
    }

    /// Fetch the lookup result; non-2xx responses are errors
    pub async fn lookup(&self) -> Result<Value, ProxyError> {
        self.http
            .get_json_checked(parse_url(self.url)?, &[("token", self.token)])
            .await
    }
}
