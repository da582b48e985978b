// src/handlers/query.rs
// DOCUMENTATION: Lenient query string extractor
// PURPOSE: Repeated parameters keep their first value instead of failing the request

use crate::errors::ProxyError;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::future::{ready, Ready};
use std::ops::Deref;

/// Query extractor where the first occurrence of a key wins
/// DOCUMENTATION: Failures surface as ProxyError, so the body stays JSON
#[derive(Debug)]
pub struct FirstValueQuery<T>(pub T);

impl<T> Deref for FirstValueQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for FirstValueQuery<T> {
    type Error = ProxyError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_first_values(req.query_string()).map(FirstValueQuery))
    }
}

/// Decode a query string into `T`, ignoring repeats of a key
pub fn parse_first_values<T: DeserializeOwned>(query_string: &str) -> Result<T, ProxyError> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
        .map_err(|e| ProxyError::Validation(e.to_string()))?
        .into_inner();

    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        log::warn!("Rejected query string: {}", e);
        ProxyError::Validation(e.to_string())
    })
}
