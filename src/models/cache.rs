use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::models::news::normalize_key;

#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub stored_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, stored_at: DateTime<Utc>) -> Self {
        Self { value, stored_at }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.stored_at < ttl
    }
}

/// Per-category batch cache. Entries are only ever overwritten, never evicted;
/// freshness is checked on every read.
#[derive(Debug)]
pub struct FetchCache<T> {
    entries: DashMap<String, CacheEntry<T>>,
    ttl: Duration,
}

impl<T: Clone> FetchCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Returns the batch for `key` if it was stored less than one TTL ago.
    pub fn get(&self, key: &str) -> Option<T> {
        self.get_at(key, Utc::now())
    }

    pub fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        self.entries
            .get(&normalize_key(key))
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.value.clone())
    }

    /// Returns the last stored batch regardless of age.
    pub fn get_stale(&self, key: &str) -> Option<T> {
        self.entries
            .get(&normalize_key(key))
            .map(|entry| entry.value.clone())
    }

    pub fn put(&self, key: &str, value: T, stored_at: DateTime<Utc>) {
        self.entries
            .insert(normalize_key(key), CacheEntry::new(value, stored_at));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> FetchCache<Vec<u32>> {
        FetchCache::new(Duration::minutes(5))
    }

    #[test]
    fn get_within_ttl_returns_stored_batch() {
        let cache = cache();
        let now = Utc::now();
        cache.put("devops", vec![1, 2, 3], now);
        assert_eq!(cache.get_at("devops", now + Duration::minutes(4)), Some(vec![1, 2, 3]));
    }

    #[test]
    fn expired_entry_misses_but_stays_available_as_fallback() {
        let cache = cache();
        let stored = Utc::now() - Duration::minutes(5);
        cache.put("devops", vec![7], stored);

        assert_eq!(cache.get("devops"), None);
        assert_eq!(cache.get_stale("devops"), Some(vec![7]));
    }

    #[test]
    fn boundary_is_exclusive() {
        let cache = cache();
        let now = Utc::now();
        cache.put("mlops", vec![1], now);
        assert!(cache.get_at("mlops", now + Duration::minutes(5)).is_none());
        assert!(cache
            .get_at("mlops", now + Duration::minutes(5) - Duration::milliseconds(1))
            .is_some());
    }

    #[test]
    fn keys_are_case_insensitive_and_overwritten() {
        let cache = cache();
        let now = Utc::now();
        cache.put("DataOps", vec![1], now);
        cache.put("dataops", vec![2], now);
        assert_eq!(cache.get("DATAOPS"), Some(vec![2]));
        assert_eq!(cache.get_stale("Dataops"), Some(vec![2]));
    }
}
