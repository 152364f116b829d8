use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::users::domain::entities::{User, UserId};
use crate::modules::users::domain::repositories::{UserCache, UserRepository};
use crate::shared::errors::AppResult;

/// Decorator that adds transparent caching to any UserRepository
///
/// The decorator wraps a repository implementation and handles cache
/// lookups and write-back without the use case knowing a cache exists.
/// Wiring order at the assembly point decides whether fetches are
/// cache-first or always remote.
pub struct CachingUserRepository {
    /// The wrapped repository implementation
    inner: Arc<dyn UserRepository>,
    /// The cache implementation
    cache: Arc<dyn UserCache>,
}

impl CachingUserRepository {
    pub fn new(inner: Arc<dyn UserRepository>, cache: Arc<dyn UserCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl UserRepository for CachingUserRepository {
    async fn get_user_details(&self, id: UserId) -> AppResult<User> {
        if let Some(cached) = self.cache.get(id).await {
            log::debug!("Cache HIT for user {}", id);
            return Ok(cached);
        }

        log::debug!("Cache MISS for user {}", id);

        let user = self.inner.get_user_details(id).await?;

        // Failures are never cached; only a complete profile warms the
        // cache.
        self.cache.put(user.clone()).await;

        Ok(user)
    }
}
