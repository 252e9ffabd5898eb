//! Time-bound in-memory memoization shared by all requests in the process.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default entry lifetime when none is configured.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) > ttl
    }
}

/// Key → value store with lazy expiry.
///
/// Entries are never swept in the background; an entry older than the TTL is
/// dropped the next time its key is looked up. There is no size bound.
#[derive(Debug)]
pub struct CacheStore<V> {
    map: RwLock<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl<V> CacheStore<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Clone> CacheStore<V> {
    /// Returns a clone of the live value for `key`, discarding it if it has expired.
    pub async fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        {
            let guard = self.map.read().await;
            match guard.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(self.ttl, now) => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
            }
        }

        let mut guard = self.map.write().await;
        // another writer may have refreshed the entry between the two locks
        if let Some(entry) = guard.get(key) {
            if !entry.is_expired(self.ttl, Instant::now()) {
                return Some(entry.value.clone());
            }
            guard.remove(key);
        }
        None
    }

    /// Inserts or overwrites `key`, stamping the current time.
    pub async fn put(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
        };
        let mut guard = self.map.write().await;
        guard.insert(key.into(), entry);
    }

    /// Number of stored entries, expired ones included until they are looked up.
    pub async fn len(&self) -> usize {
        self.map.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.map.read().await.is_empty()
    }
}
