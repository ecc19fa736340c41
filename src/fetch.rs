use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    cache::ResponseCache,
    common::{errors::UpstreamError, types::RawPayload},
};

/// Where raw payloads come from. One call is exactly one round trip.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get(&self, locator: &str) -> Result<String, UpstreamError>;
}

/// Plain HTTP GET against the catalog site.
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get(&self, locator: &str) -> Result<String, UpstreamError> {
        let resp = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|source| UpstreamError::Request {
                url: locator.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: locator.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|source| UpstreamError::Body {
            url: locator.to_string(),
            source,
        })
    }
}

/// Cache-first payload retrieval. Misses cost one upstream call and no retries;
/// only successful payloads are stored.
#[derive(Clone)]
pub struct Fetcher {
    cache: Arc<ResponseCache>,
    upstream: Arc<dyn Upstream>,
}

impl Fetcher {
    pub fn new(cache: Arc<ResponseCache>, upstream: Arc<dyn Upstream>) -> Self {
        Self { cache, upstream }
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub async fn fetch(&self, locator: &str) -> Result<RawPayload, UpstreamError> {
        if let Some(payload) = self.cache.get(locator) {
            return Ok(payload);
        }

        let payload = self.fetch_uncached(locator).await?;
        self.cache.set(locator, payload.clone());
        Ok(payload)
    }

    /// Goes straight to the upstream and leaves the cache untouched.
    pub async fn fetch_uncached(&self, locator: &str) -> Result<RawPayload, UpstreamError> {
        debug!("Fetching {}", locator);
        match self.upstream.get(locator).await {
            Ok(body) => Ok(RawPayload::from(body)),
            Err(e) => {
                warn!("Upstream fetch failed: {}", e);
                Err(e)
            }
        }
    }
}
