// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export request and upstream payload models

pub mod geocode;
pub mod search;

pub use geocode::*;
pub use search::*;
