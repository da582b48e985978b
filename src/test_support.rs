// src/test_support.rs
// DOCUMENTATION: Local stand-in for the third-party APIs
// PURPOSE: Let tests drive real HTTP calls without leaving the machine

use crate::config::Config;
use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
use reqwest::Url;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Address the geocoder fixture treats as unknown
pub const UNKNOWN_LOCATION: &str = "Nowhere At All";

/// Address the geocoder fixture answers with `"results": null`
pub const NULL_RESULTS_LOCATION: &str = "Null Island Annex";

/// Address the geocoder fixture answers with string coordinates
pub const STRING_COORDS_LOCATION: &str = "Stringville";

type Hits = Arc<Mutex<HashMap<String, usize>>>;

/// Mock upstream server bound to an ephemeral local port
pub struct MockUpstream {
    addr: SocketAddr,
    hits: Hits,
}

impl MockUpstream {
    /// Start the server on the current actix system
    pub async fn start() -> Self {
        let hits: Hits = Arc::new(Mutex::new(HashMap::new()));
        let state = hits.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .default_service(web::to(respond))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind mock upstream");

        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());

        Self { addr, hits }
    }

    /// Absolute URL for `path` on this server
    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("http://{}{}", self.addr, path)).expect("valid mock url")
    }

    /// Number of requests received for `path`
    pub fn hits(&self, path: &str) -> usize {
        self.hits
            .lock()
            .expect("hits lock")
            .get(path)
            .copied()
            .unwrap_or(0)
    }

    /// Configuration with every credential set and every endpoint pointed here
    pub fn config(&self) -> Config {
        let mut config = Config::from_vars(|_| None);
        config.ticketmaster_api_key = Some("tm-test-key".to_string());
        config.google_api_key = Some("google-test-key".to_string());
        config.ipinfo_token = Some("ipinfo-test-token".to_string());
        config.ticketmaster_base_url = self.url("/discovery/v2").to_string();
        config.geocode_url = self.url("/geocode/json").to_string();
        config.ipinfo_url = self.url("/ipinfo/json").to_string();
        config
    }
}

/// Configuration whose endpoints refuse connections
pub fn unreachable_config() -> Config {
    let mut config = Config::from_vars(|_| None);
    config.ticketmaster_api_key = Some("tm-test-key".to_string());
    config.google_api_key = Some("google-test-key".to_string());
    config.ipinfo_token = Some("ipinfo-test-token".to_string());
    config.ticketmaster_base_url = "http://127.0.0.1:1/discovery/v2".to_string();
    config.geocode_url = "http://127.0.0.1:1/geocode/json".to_string();
    config.ipinfo_url = "http://127.0.0.1:1/ipinfo/json".to_string();
    config
}

async fn respond(req: HttpRequest, hits: web::Data<Hits>) -> HttpResponse {
    let path = req.path().to_string();
    *hits.lock().expect("hits lock").entry(path.clone()).or_insert(0) += 1;

    let query: HashMap<String, String> =
        web::Query::<HashMap<String, String>>::from_query(req.query_string())
            .map(|q| q.into_inner())
            .unwrap_or_default();

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match segments.as_slice() {
        ["status", code] => {
            let status = code
                .parse()
                .ok()
                .and_then(|c| StatusCode::from_u16(c).ok())
                .unwrap_or(StatusCode::OK);
            HttpResponse::build(status).json(json!({ "status": status.as_u16(), "query": query }))
        }
        ["garbage"] => HttpResponse::Ok()
            .content_type("text/html")
            .body("<html>definitely not json</html>"),
        ["slow"] => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            HttpResponse::Ok().json(json!({ "slow": true }))
        }
        ["geocode", "json"] => HttpResponse::Ok().json(geocode_fixture(&query)),
        ["discovery", "v2", "events.json"] => HttpResponse::Ok().json(json!({
            "kind": "event-search",
            "query": query,
            "page": { "size": 20, "totalElements": 1 }
        })),
        ["discovery", "v2", "events", id] => {
            if *id == "missing" {
                HttpResponse::NotFound().json(json!({
                    "errors": [{ "code": "DIS1004", "detail": "Resource not found" }]
                }))
            } else {
                HttpResponse::Ok().json(json!({ "kind": "event", "id": id, "query": query }))
            }
        }
        ["discovery", "v2", "venues"] => HttpResponse::Ok().json(json!({
            "kind": "venue-search",
            "query": query
        })),
        ["ipinfo", "json"] => match query.get("token").map(String::as_str) {
            Some("ipinfo-test-token") => HttpResponse::Ok().json(json!({
                "ip": "203.0.113.7",
                "city": "Los Angeles",
                "loc": "34.0522,-118.2437"
            })),
            _ => HttpResponse::Forbidden().json(json!({ "error": { "title": "Wrong token" } })),
        },
        _ => HttpResponse::NotFound().json(json!({ "path": req.path() })),
    }
}

fn geocode_fixture(query: &HashMap<String, String>) -> Value {
    match query.get("address").map(String::as_str) {
        Some(UNKNOWN_LOCATION) => json!({ "results": [], "status": "ZERO_RESULTS" }),
        Some(NULL_RESULTS_LOCATION) => json!({ "results": null, "status": "INVALID_REQUEST" }),
        Some(STRING_COORDS_LOCATION) => json!({
            "results": [{ "geometry": { "location": { "lat": "40.7128", "lng": "-74.0060" } } }],
            "status": "OK"
        }),
        _ => json!({
            "results": [{
                "formatted_address": "New York, NY, USA",
                "geometry": { "location": { "lat": 40.7128, "lng": -74.0060 } }
            }, {
                "partial_match": true
            }],
            "status": "OK"
        }),
    }
}
