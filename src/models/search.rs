// src/models/search.rs
// DOCUMENTATION: Query parameters accepted by the event and venue routes
// PURPOSE: Deserialize, default and validate caller input

use serde::Deserialize;
use validator::Validate;

/// Category value meaning "do not filter by segment"
pub const DEFAULT_CATEGORY: &str = "Default";

/// Radius used when the caller does not send one
pub const DEFAULT_DISTANCE: &str = "10";

/// Query string for GET /search
/// DOCUMENTATION: Missing fields fall back to defaults so validation,
/// not deserialization, decides which field is reported
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQuery {
    /// Free-text keyword forwarded to the ticketing search
    #[serde(default)]
    #[validate(length(min = 1, message = "Keyword is required"))]
    pub keyword: String,

    /// Search radius in miles, passed through untouched
    #[serde(default = "default_distance")]
    pub distance: String,

    /// Human-readable segment name, or "Default"
    #[serde(default = "default_category")]
    pub category: String,

    /// Free-text location handed to the geocoder
    #[serde(default)]
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
}

fn default_distance() -> String {
    DEFAULT_DISTANCE.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl SearchQuery {
    /// Validate and report only the first failing field
    /// DOCUMENTATION: keyword is checked before location
    pub fn first_violation(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let field_errors = errors.field_errors();

        ["keyword", "location"].iter().find_map(|field| {
            field_errors.get(field).and_then(|errs| {
                errs.first().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
        })
    }

    /// Segment filter for this query, if any
    pub fn segment_id(&self) -> Option<&'static str> {
        if self.category == DEFAULT_CATEGORY {
            return None;
        }

        let segment = Segment::from_name(&self.category);
        if segment.is_none() {
            log::debug!("Unrecognized category '{}', searching without segment filter", self.category);
        }
        segment.map(Segment::id)
    }
}

/// Query string for GET /venue
#[derive(Debug, Clone, Deserialize)]
pub struct VenueQuery {
    /// Venue name keyword; empty is forwarded as-is
    #[serde(default)]
    pub keyword: String,
}

/// Top-level Ticketmaster event classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Music,
    Sports,
    ArtsTheatre,
    Film,
    Miscellaneous,
}

impl Segment {
    /// Map a category name as shown to users onto a segment
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Music" => Some(Segment::Music),
            "Sports" => Some(Segment::Sports),
            "Arts & Theatre" => Some(Segment::ArtsTheatre),
            "Film" => Some(Segment::Film),
            "Miscellaneous" => Some(Segment::Miscellaneous),
            _ => None,
        }
    }

    /// Ticketmaster segment identifier
    pub fn id(self) -> &'static str {
        match self {
            Segment::Music => "KZFzniwnSyZfZ7v7nJ",
            Segment::Sports => "KZFzniwnSyZfZ7v7nE",
            Segment::ArtsTheatre => "KZFzniwnSyZfZ7v7na",
            Segment::Film => "KZFzniwnSyZfZ7v7nn",
            Segment::Miscellaneous => "KZFzniwnSyZfZ7v7n1",
        }
    }
}
