use std::collections::HashMap;
use std::hash::Hash;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Process-local expiring cache for display-only aggregates.
///
/// Entries expire on a flat TTL and are never invalidated by writes, so
/// readers may observe data up to `ttl` old. That staleness window is a
/// deliberate trade: the stats endpoints are hot and their numbers are
/// cosmetic.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, (V, Instant)>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached value if it is still within the TTL window.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().ok()?;
        let (value, stored_at) = entries.get(key)?;
        if stored_at.elapsed() < self.ttl {
            Some(value.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, key: K, value: V) {
        if let Ok(mut entries) = self.entries.write() {
            // Expired entries are replaced lazily; the key space here is a
            // handful of stats names, so no sweeper is needed.
            entries.insert(key, (value, Instant::now()));
        }
    }

    /// Fetches from the cache, or computes and stores on a miss.
    pub async fn get_or_insert_with<F, Fut, E>(&self, key: K, compute: F) -> Result<V, E>
    where
        K: Clone,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let value = compute().await?;
        self.insert(key, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_inserted_value_within_ttl() {
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(60));
        cache.insert("stats", 42);

        assert_eq!(cache.get(&"stats"), Some(42));
    }

    #[test]
    fn get_misses_after_expiry() {
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::ZERO);
        cache.insert("stats", 42);

        assert_eq!(cache.get(&"stats"), None);
    }

    #[test]
    fn get_misses_on_unknown_key() {
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(60));

        assert_eq!(cache.get(&"missing"), None);
    }

    #[test]
    fn insert_overwrites_previous_value() {
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(60));
        cache.insert("stats", 1);
        cache.insert("stats", 2);

        assert_eq!(cache.get(&"stats"), Some(2));
    }

    #[tokio::test]
    async fn get_or_insert_with_computes_once_within_ttl() {
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(60));

        let first: Result<u32, ()> = cache.get_or_insert_with("k", || async { Ok(7) }).await;
        assert_eq!(first, Ok(7));

        // Second call must hit the cache, not the (failing) compute closure
        let second: Result<u32, ()> = cache.get_or_insert_with("k", || async { Err(()) }).await;
        assert_eq!(second, Ok(7));
    }

    #[tokio::test]
    async fn get_or_insert_with_propagates_compute_error() {
        let cache: TtlCache<&str, u32> = TtlCache::new(Duration::from_secs(60));

        let result: Result<u32, &str> = cache
            .get_or_insert_with("k", || async { Err("db down") })
            .await;

        assert_eq!(result, Err("db down"));
        assert_eq!(cache.get(&"k"), None);
    }
}
