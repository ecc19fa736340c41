use std::sync::Arc;

use crate::{
    cache::ResponseCache,
    common::{HttpClient, types::{AnyResult, now_ms}},
    configs::Config,
    fetch::{Fetcher, HttpUpstream, Upstream},
    sources::JioSaavnSource,
};

/// Top-level application state. The cache is the only thing shared between
/// requests; it lives as long as the process.
pub struct AppState {
    pub cache: Arc<ResponseCache>,
    pub jiosaavn: Arc<JioSaavnSource>,
    pub started_at_ms: u64,
}

impl AppState {
    pub fn from_config(config: &Config) -> AnyResult<Self> {
        let client = HttpClient::new(&config.jiosaavn)?;
        Self::with_upstream(config, Arc::new(HttpUpstream::new(client)))
    }

    pub fn with_upstream(config: &Config, upstream: Arc<dyn Upstream>) -> AnyResult<Self> {
        let cache = Arc::new(ResponseCache::new(config.cache.ttl()));
        let fetcher = Fetcher::new(cache.clone(), upstream);
        let jiosaavn = Arc::new(JioSaavnSource::new(&config.jiosaavn, fetcher)?);

        Ok(Self {
            cache,
            jiosaavn,
            started_at_ms: now_ms(),
        })
    }

    pub fn uptime_ms(&self) -> u64 {
        now_ms().saturating_sub(self.started_at_ms)
    }
}
