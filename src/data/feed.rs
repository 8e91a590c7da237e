//! Fetching GeoJSON feeds over HTTP

use crate::{core::config::FeedConfig, data::geojson::GeoJson, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Shared async HTTP client with the default feed settings
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    build_client(&FeedConfig::default()).unwrap_or_else(|e| {
        log::warn!("falling back to a bare HTTP client: {}", e);
        reqwest::Client::new()
    })
});

fn build_client(config: &FeedConfig) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.request_timeout())
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .build()?)
}

/// Anything that can turn a URL into a parsed GeoJSON document
#[async_trait]
pub trait FeedClient: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<GeoJson>;
}

/// [`FeedClient`] backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    client: reqwest::Client,
}

impl HttpFeedClient {
    /// Client with its own user agent and timeout
    pub fn new(config: &FeedConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
        })
    }

    /// Client sharing the process-wide connection pool
    pub fn shared() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
        }
    }
}

impl Default for HttpFeedClient {
    fn default() -> Self {
        Self::shared()
    }
}

#[async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(&self, url: &str) -> Result<GeoJson> {
        log::debug!("fetching {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        log::debug!("fetched {} ({} bytes)", url, body.len());

        parse_feed(body).await
    }
}

/// Parses a feed body on tokio's blocking pool, since the weekly earthquake
/// feed runs to several megabytes.
#[cfg(feature = "tokio-runtime")]
pub async fn parse_feed(body: String) -> Result<GeoJson> {
    tokio::task::spawn_blocking(move || body.parse::<GeoJson>())
        .await
        .map_err(|e| crate::Error::ParseError(format!("GeoJSON parse task failed: {}", e)))?
}

#[cfg(not(feature = "tokio-runtime"))]
pub async fn parse_feed(body: String) -> Result<GeoJson> {
    body.parse::<GeoJson>()
}
