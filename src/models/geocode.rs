// src/models/geocode.rs
// DOCUMENTATION: Google Geocoding API response structures
// PURPOSE: Pull the first result's coordinates out of a geocode response

use serde::Deserialize;
use serde_json::Value;

/// Response from the Google Geocoding API
/// DOCUMENTATION: Only the fields the search pipeline reads are modelled
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// Candidate matches, best first. Absent or null when the lookup failed.
    /// Kept raw so that only the first match has to be well formed.
    #[serde(default)]
    pub results: Option<Vec<Value>>,

    /// API status (OK, ZERO_RESULTS, REQUEST_DENIED, ...)
    #[serde(default)]
    pub status: Option<String>,

    /// Error message (if status is not OK)
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Single geocoding match
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeGeometry {
    pub location: GeocodeLocation,
}

/// Coordinates as sent by the geocoder
#[derive(Debug, Deserialize)]
pub struct GeocodeLocation {
    pub lat: Coordinate,
    pub lng: Coordinate,
}

/// A coordinate encoded either as a JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    pub fn as_f64(&self) -> Result<f64, String> {
        match self {
            Coordinate::Number(n) => Ok(*n),
            Coordinate::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("could not convert string to float: '{}'", s)),
        }
    }
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodeResponse {
    /// Whether the geocoder returned at least one match
    pub fn has_results(&self) -> bool {
        self.results.as_ref().map_or(false, |r| !r.is_empty())
    }

    /// Coordinates of the best match
    /// DOCUMENTATION: Ok(None) means the geocoder found nothing
    pub fn first_location(&self) -> Result<Option<LatLng>, String> {
        let Some(first) = self.results.as_ref().and_then(|r| r.first()) else {
            return Ok(None);
        };

        let first = GeocodeResult::deserialize(first).map_err(|e| e.to_string())?;
        let location = &first.geometry.location;
        Ok(Some(LatLng {
            latitude: location.lat.as_f64()?,
            longitude: location.lng.as_f64()?,
        }))
    }
}
