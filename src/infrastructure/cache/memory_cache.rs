//! Process-local cache with per-entry expiry.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory key-value store for single-instance deployments and tests.
///
/// Entries past their TTL are treated as absent and removed on the next read
/// of that key.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time left before `key` expires, if it is present.
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        entry.expires_at.checked_duration_since(Instant::now())
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        // Re-check: a writer may have refreshed the entry in between.
        if entries
            .get(key)
            .is_some_and(|entry| entry.expires_at <= Instant::now())
        {
            entries.remove(key);
            debug!("Memory cache entry expired: {}", key);
        }
        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let expires_at = Instant::now()
            .checked_add(Duration::from_secs(ttl_seconds))
            .ok_or_else(|| {
                CacheError::OperationError(format!("TTL of {}s is out of range", ttl_seconds))
            })?;
        let entry = Entry {
            value: value.to_string(),
            expires_at,
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
