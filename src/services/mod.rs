// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export the components handlers and main depend on

pub mod event_service;
pub mod geo_hash;
pub mod geocoding_client;
pub mod ipinfo_client;
pub mod ticketmaster_client;
pub mod upstream;

pub use event_service::EventService;
pub use upstream::UpstreamClient;
