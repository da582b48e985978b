// src/services/geo_hash.rs
// DOCUMENTATION: Coordinate to geohash conversion
// PURPOSE: Produce the proximity key the Ticketmaster search expects

use crate::errors::ProxyError;
use crate::models::LatLng;
use geohash::{encode, Coord};

/// Cells at this length are roughly 150m x 150m
pub const GEOHASH_PRECISION: usize = 7;

/// Encode a coordinate pair as a fixed-length geohash
pub fn encode_location(location: LatLng) -> Result<String, ProxyError> {
    let coord = Coord {
        x: location.longitude,
        y: location.latitude,
    };

    encode(coord, GEOHASH_PRECISION).map_err(|e| {
        log::error!(
            "Failed to geohash lat={}, lng={}: {}",
            location.latitude,
            location.longitude,
            e
        );
        ProxyError::Upstream(format!("Failed to encode geohash: {}", e))
    })
}
