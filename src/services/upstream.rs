// src/services/upstream.rs
// DOCUMENTATION: Shared HTTP client for third-party APIs
// PURPOSE: One reqwest client, one timeout, one way to turn responses into JSON

use crate::errors::ProxyError;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Outbound HTTP client shared by every route
/// DOCUMENTATION: Built once at startup and cloned into the app state.
/// reqwest::Client is reference counted, so clones share one pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    /// Create a client whose requests all give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body, whatever the status code
    pub async fn get_json<T, Q>(&self, url: Url, params: &Q) -> Result<T, ProxyError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.send(url, params).await?;
        Ok(response.json().await?)
    }

    /// GET `url` and decode the body, failing on any non-2xx status
    pub async fn get_json_checked<T, Q>(&self, url: Url, params: &Q) -> Result<T, ProxyError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.send(url, params).await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn send<Q>(&self, url: Url, params: &Q) -> Result<reqwest::Response, ProxyError>
    where
        Q: Serialize + ?Sized,
    {
        log::debug!("GET {}://{}{}", url.scheme(), url.host_str().unwrap_or(""), url.path());

        self.client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let err = ProxyError::from(e);
                log::error!("Upstream request failed: {}", err);
                err
            })
    }
}

/// Parse a configured endpoint URL
pub fn parse_url(raw: &str) -> Result<Url, ProxyError> {
    Url::parse(raw).map_err(|e| ProxyError::Upstream(format!("Invalid upstream URL '{}': {}", raw, e)))
}

/// Append escaped path segments to a base URL
pub fn join_segments(base: &str, segments: &[&str]) -> Result<Url, ProxyError> {
    let mut url = parse_url(base)?;
    url.path_segments_mut()
        .map_err(|_| ProxyError::Upstream(format!("Upstream URL '{}' cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
