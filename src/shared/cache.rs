use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

/// Read-through cache with per-entry TTL and explicit invalidation.
///
/// Workflow decisions (category policy, actor office) depend on lookups
/// that rarely change; caching them here replaces the ambient per-session
/// stores the UI used to hold.
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, Entry<V>>>,
    ttl: Duration,
}

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get a live entry, if any. Expired entries are treated as absent.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|e| e.inserted_at.elapsed() < self.ttl)
            .map(|e| e.value.clone())
    }

    pub async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            Entry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    pub async fn invalidate(&self, key: &K) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    /// Read-through: return the cached value or load it with `load` and
    /// cache the result. A load failure is returned without caching, so
    /// the next call retries.
    pub async fn get_or_try_load<F, Fut, E>(&self, key: K, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key).await {
            return Ok(value);
        }

        let value = load().await?;
        self.insert(key, value.clone()).await;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache: TtlCache<i64, String> = TtlCache::new(Duration::from_secs(60));
        cache.insert(1, "No CA Mark".to_string()).await;

        assert_eq!(cache.get(&1).await.as_deref(), Some("No CA Mark"));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(cache.get(&1).await, None);
    }

    #[tokio::test]
    async fn test_read_through_loads_once() {
        let cache: TtlCache<i64, String> = TtlCache::new(Duration::from_secs(60));

        let loaded = cache
            .get_or_try_load(7, || async { Ok::<_, ()>("Missing Grade".to_string()) })
            .await
            .unwrap();
        assert_eq!(loaded, "Missing Grade");

        // Second call must hit the cache, never the loader
        let cached = cache
            .get_or_try_load(7, || async { Err(()) })
            .await
            .unwrap();
        assert_eq!(cached, "Missing Grade");
    }

    #[tokio::test]
    async fn test_load_failure_is_not_cached() {
        let cache: TtlCache<i64, String> = TtlCache::new(Duration::from_secs(60));

        let failed: Result<String, &str> = cache
            .get_or_try_load(9, || async { Err("category fetch failed") })
            .await;
        assert!(failed.is_err());

        // Retry succeeds and caches
        let loaded = cache
            .get_or_try_load(9, || async { Ok::<_, &str>("No Exam Mark".to_string()) })
            .await
            .unwrap();
        assert_eq!(loaded, "No Exam Mark");
    }

    #[tokio::test]
    async fn test_invalidate_removes_entry() {
        let cache: TtlCache<i64, i64> = TtlCache::new(Duration::from_secs(60));
        cache.insert(1, 10).await;
        cache.invalidate(&1).await;
        assert_eq!(cache.get(&1).await, None);
    }
}
