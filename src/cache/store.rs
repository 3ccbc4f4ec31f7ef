//! In-memory result cache.

use crate::types::Prediction;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Clone)]
struct Entry {
    payload: Prediction,
    stored_at: Instant,
    last_accessed: Instant,
}

impl Entry {
    fn new(payload: Prediction) -> Self {
        let now = Instant::now();
        Self {
            payload,
            stored_at: now,
            last_accessed: now,
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() >= ttl
    }
}

/// Cache counters, read via [`ResultCache::stats`].
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
}

/// Maps input fingerprints to previously computed predictions.
///
/// An entry is servable only while younger than the configured TTL; an
/// expired entry is treated as a miss and dropped. Writes evict expired
/// entries first, then the least-recently-used entries once the store is
/// at capacity, so memory stays bounded.
pub struct ResultCache {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<String, Entry>>,
    stats: AtomicStats,
}

impl ResultCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries,
            entries: RwLock::new(HashMap::new()),
            stats: AtomicStats::default(),
        }
    }

    /// Look up a fingerprint, returning the payload only if still fresh.
    pub fn get(&self, key: &str) -> Option<Prediction> {
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get_mut(key) {
            if entry.is_expired(self.ttl) {
                entries.remove(key);
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
            entry.last_accessed = Instant::now();
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
            return Some(entry.payload.clone());
        }
        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store or overwrite the payload for a fingerprint, stamped now.
    pub fn put(&self, key: &str, payload: Prediction) {
        let mut entries = self.entries.write();
        self.evict_if_needed(&mut entries);
        entries.insert(key.to_string(), Entry::new(payload));
        self.stats.sets.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of fresh entries currently stored.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .values()
            .filter(|e| !e.is_expired(self.ttl))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.stats.hits.load(Ordering::Relaxed),
            misses: self.stats.misses.load(Ordering::Relaxed),
            sets: self.stats.sets.load(Ordering::Relaxed),
        }
    }

    fn evict_if_needed(&self, entries: &mut HashMap<String, Entry>) {
        entries.retain(|_, e| !e.is_expired(self.ttl));
        while entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.last_accessed)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(k) => {
                    entries.remove(&k);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;
    use std::thread;

    fn payload(rating: u8) -> Prediction {
        Prediction {
            sentiment: Sentiment::Positive,
            sentiment_score: 90,
            rating,
        }
    }

    #[test]
    fn fresh_entry_is_served() {
        let cache = ResultCache::new(Duration::from_secs(60), 16);
        cache.put("abc", payload(4));
        assert_eq!(cache.get("abc"), Some(payload(4)));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.sets, 1);
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let cache = ResultCache::new(Duration::from_millis(20), 16);
        cache.put("abc", payload(4));
        thread::sleep(Duration::from_millis(30));
        assert_eq!(cache.get("abc"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn overwrite_replaces_payload() {
        let cache = ResultCache::new(Duration::from_secs(60), 16);
        cache.put("abc", payload(2));
        cache.put("abc", payload(5));
        assert_eq!(cache.get("abc"), Some(payload(5)));
    }

    #[test]
    fn lru_eviction_keeps_store_bounded() {
        let cache = ResultCache::new(Duration::from_secs(60), 2);
        cache.put("a", payload(1));
        cache.put("b", payload(2));
        // Touch "a" so "b" becomes the eviction candidate.
        cache.get("a");
        cache.put("c", payload(3));
        assert!(cache.len() <= 2);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a"), Some(payload(1)));
    }

    #[test]
    fn hit_ratio() {
        let cache = ResultCache::new(Duration::from_secs(60), 16);
        cache.put("abc", payload(3));
        cache.get("abc");
        cache.get("missing");
        assert!((cache.stats().hit_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
