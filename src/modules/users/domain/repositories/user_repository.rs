use async_trait::async_trait;

use crate::modules::users::domain::entities::{User, UserId};
use crate::shared::errors::AppResult;

/// Repository interface for user profile data access
/// This defines the contract for fetching a profile regardless of where
/// it lives (cache, remote store, or both).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the full profile for `id`.
    ///
    /// Either the complete record comes back or the call fails; there
    /// is no partial result. A missing user is `AppError::NotFound`.
    async fn get_user_details(&self, id: UserId) -> AppResult<User>;
}
