/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use persona::modules::users::domain::entities::{User, UserId};

pub struct UserFactory {
    user: User,
}

impl UserFactory {
    pub fn minimal(id: UserId) -> Self {
        Self {
            user: User {
                id,
                full_name: format!("User {}", id),
                email: format!("user{}@example.com", id),
                followers: 0,
                description: String::new(),
                cover_url: String::new(),
            },
        }
    }

    pub fn with_full_name(mut self, full_name: &str) -> Self {
        self.user.full_name = full_name.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.user.email = email.to_string();
        self
    }

    pub fn with_followers(mut self, followers: u32) -> Self {
        self.user.followers = followers;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.user.description = description.to_string();
        self
    }

    pub fn with_cover_url(mut self, cover_url: &str) -> Self {
        self.user.cover_url = cover_url.to_string();
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}
