use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::common::types::RawPayload;

/// A cached upstream payload together with the moment it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: RawPayload,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl CacheEntry {
    /// A zero `ttl` never expires.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        !self.ttl.is_zero() && now.saturating_duration_since(self.created_at) >= self.ttl
    }
}

/// Locator-keyed store of raw upstream payloads with a fixed TTL.
///
/// Expiry is checked on every read, so an expired entry is never handed out
/// even if the background sweep has not run yet. Concurrent writers to the
/// same key resolve as last-writer-wins.
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<RawPayload> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired_at(now) {
                trace!("cache hit: {}", key);
                return Some(entry.value.clone());
            }
        }

        // Drop the stale entry, unless a writer refreshed it in the meantime.
        self.entries.remove_if(key, |_, entry| entry.is_expired_at(now));
        None
    }

    pub fn set(&self, key: impl Into<String>, value: RawPayload) {
        self.insert_at(key.into(), value, Instant::now());
    }

    fn insert_at(&self, key: String, value: RawPayload, created_at: Instant) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                created_at,
                ttl: self.ttl,
            },
        );
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before.saturating_sub(self.entries.len())
    }

    /// Spawns the periodic sweep. The task lives as long as the cache does.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        let cache = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(cache) = cache.upgrade() else {
                    break;
                };
                let removed = cache.sweep();
                if removed > 0 {
                    debug!("Swept {} expired cache entries", removed);
                }
            }
        })
    }
}
