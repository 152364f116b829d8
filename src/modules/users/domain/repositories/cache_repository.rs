use async_trait::async_trait;
use serde::Serialize;

use crate::modules::users::domain::entities::{User, UserId};

/// Repository interface for caching user profiles
/// This abstracts the caching mechanism from business logic
#[async_trait]
pub trait UserCache: Send + Sync {
    /// Get a cached profile if present and fresh
    async fn get(&self, id: UserId) -> Option<User>;

    /// Cache a profile under its own id
    async fn put(&self, user: User);

    /// Drop a single cached profile
    async fn evict(&self, id: UserId);

    /// Drop every cached profile
    async fn clear(&self);

    /// Whether a fresh entry exists for `id` (does not count as a hit)
    async fn is_cached(&self, id: UserId) -> bool;

    /// Cache statistics for monitoring
    async fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub expired_cleanups: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}
