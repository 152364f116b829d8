use async_trait::async_trait;

use crate::modules::users::domain::entities::{User, UserId};
use crate::modules::users::domain::repositories::UserRepository;
use crate::modules::users::infrastructure::datasource::CloudUserDataSource;
use crate::shared::errors::AppResult;

/// `UserRepository` backed by the remote profile store.
pub struct UserDataRepository {
    datasource: CloudUserDataSource,
}

impl UserDataRepository {
    pub fn new(datasource: CloudUserDataSource) -> Self {
        Self { datasource }
    }
}

#[async_trait]
impl UserRepository for UserDataRepository {
    async fn get_user_details(&self, id: UserId) -> AppResult<User> {
        self.datasource.fetch_user(id).await
    }
}
