// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_TICKETMASTER_BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";
const DEFAULT_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const DEFAULT_IPINFO_URL: &str = "https://ipinfo.io/json";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup, then share it
/// with handlers through web::Data
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 5001)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Ticketmaster Discovery API key
    pub ticketmaster_api_key: Option<String>,

    /// Google Geocoding API key
    pub google_api_key: Option<String>,

    /// IPInfo access token
    pub ipinfo_token: Option<String>,

    /// Ticketmaster Discovery API base URL (no trailing slash)
    pub ticketmaster_base_url: String,

    /// Google Geocoding endpoint
    pub geocode_url: String,

    /// IPInfo lookup endpoint
    pub ipinfo_url: String,

    /// Timeout applied to every outbound request, in seconds
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Config {
            server_address: or_default("SERVER_ADDRESS", "0.0.0.0"),

            server_port: lookup("PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(5001),

            environment: or_default("ENVIRONMENT", "development"),

            log_level: or_default("LOG_LEVEL", "info"),

            ticketmaster_api_key: credential(lookup("TICKETMASTER_API_KEY")),

            google_api_key: credential(lookup("GOOGLE_API_KEY")),

            ipinfo_token: credential(lookup("IPINFO_KEY")),

            ticketmaster_base_url: or_default("TICKETMASTER_BASE_URL", DEFAULT_TICKETMASTER_BASE_URL)
                .trim_end_matches('/')
                .to_string(),

            geocode_url: or_default("GOOGLE_GEOCODE_URL", DEFAULT_GEOCODE_URL),

            ipinfo_url: or_default("IPINFO_URL", DEFAULT_IPINFO_URL),

            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .and_then(|secs| secs.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(5),
        }
    }

    /// Timeout shared by all outbound calls
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Report configuration problems at startup
    /// DOCUMENTATION: Missing credentials only disable the routes that need them,
    /// so they are logged rather than treated as fatal
    pub fn validate(&self) -> Result<(), String> {
        if self.server_address.is_empty() {
            return Err("SERVER_ADDRESS must not be empty".to_string());
        }

        if self.ticketmaster_api_key.is_none() {
            log::warn!("TICKETMASTER_API_KEY not configured - /search, /event and /venue will fail");
        }

        if self.google_api_key.is_none() {
            log::warn!("GOOGLE_API_KEY not configured - /search will fail");
        }

        if self.ipinfo_token.is_none() {
            log::warn!("IPINFO_KEY not configured - /ipinfo will fail");
        }

        Ok(())
    }
}

/// Blank credentials count as missing
fn credential(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
