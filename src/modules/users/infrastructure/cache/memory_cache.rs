use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use crate::modules::users::domain::entities::{User, UserId};
use crate::modules::users::domain::repositories::{CacheStats, UserCache};

/// Cached profile with TTL support
#[derive(Debug, Clone)]
struct CacheEntry {
    user: User,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(user: User, ttl: Duration) -> Self {
        Self {
            user,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// In-memory profile cache with TTL support, a bounded entry count and
/// background cleanup of expired entries.
#[derive(Debug)]
pub struct InMemoryUserCache {
    entries: Arc<DashMap<UserId, CacheEntry>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    cleanups: Arc<AtomicU64>,
    cleanup_task_started: Arc<AtomicBool>,
    ttl: Duration,
    max_entries: usize,
}

impl InMemoryUserCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
            cleanups: Arc::new(AtomicU64::new(0)),
            cleanup_task_started: Arc::new(AtomicBool::new(false)),
            ttl,
            max_entries,
        }
    }

    /// Cache with default settings (30 minutes TTL, 1000 max entries)
    pub fn with_defaults() -> Self {
        Self::new(Duration::from_secs(1800), 1000)
    }

    /// Ensure cleanup task is started (idempotent). Called from the
    /// async trait methods so a runtime is guaranteed to be present.
    fn ensure_cleanup_task_started(&self) {
        if self
            .cleanup_task_started
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return; // Task already started
        }

        self.start_cleanup_task();
        debug!("Background cache cleanup task started");
    }

    /// Background task sweeping expired entries
    fn start_cleanup_task(&self) {
        let entries = self.entries.clone();
        let cleanups = self.cleanups.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(300));

            loop {
                interval.tick().await;

                let before = entries.len();
                entries.retain(|_, entry| !entry.is_expired());
                let swept = before.saturating_sub(entries.len());

                if swept > 0 {
                    cleanups.fetch_add(swept as u64, Ordering::Relaxed);
                    debug!("Cleaned up {} expired cache entries", swept);
                }
            }
        });
    }

    /// Evict oldest entries until the cache is back under its bound
    fn evict_oldest_entries(&self) {
        let current_size = self.entries.len();
        if current_size < self.max_entries {
            return;
        }

        let mut by_age: Vec<(UserId, Instant)> = self
            .entries
            .iter()
            .map(|entry| (*entry.key(), entry.value().created_at))
            .collect();
        by_age.sort_by_key(|(_, created_at)| *created_at);

        // Evict down to 90% of capacity so inserts don't thrash
        let target_size = (self.max_entries * 9) / 10;
        let to_evict = current_size.saturating_sub(target_size).max(1);

        for (id, _) in by_age.into_iter().take(to_evict) {
            self.entries.remove(&id);
        }

        debug!(
            "Evicted {} old cache entries (was {}, now {})",
            to_evict,
            current_size,
            self.entries.len()
        );
    }
}

#[async_trait]
impl UserCache for InMemoryUserCache {
    async fn get(&self, id: UserId) -> Option<User> {
        self.ensure_cleanup_task_started();

        let expired = match self.entries.get(&id) {
            Some(entry) => {
                if !entry.is_expired() {
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    debug!("Cache hit for user {}", id);
                    return Some(entry.user.clone());
                }
                true
            }
            None => false,
        };

        if expired {
            self.entries.remove(&id);
            debug!("Removed expired cache entry for user {}", id);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for user {}", id);
        None
    }

    async fn put(&self, user: User) {
        self.ensure_cleanup_task_started();

        if self.entries.len() >= self.max_entries {
            self.evict_oldest_entries();
        }

        let id = user.id;
        self.entries.insert(id, CacheEntry::new(user, self.ttl));
        debug!("Cached profile for user {} with TTL {:?}", id, self.ttl);
    }

    async fn evict(&self, id: UserId) {
        self.entries.remove(&id);
    }

    async fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.cleanups.store(0, Ordering::Relaxed);
        info!("User cache cleared");
    }

    async fn is_cached(&self, id: UserId) -> bool {
        self.entries
            .get(&id)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false)
    }

    async fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired_cleanups: self.cleanups.load(Ordering::Relaxed),
        }
    }
}
