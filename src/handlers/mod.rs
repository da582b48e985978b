// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod events;
pub mod health;
pub mod index;
pub mod ipinfo;
pub mod query;

pub use events::config as events_config;
pub use health::config as health_config;
pub use index::config as index_config;
pub use ipinfo::config as ipinfo_config;
