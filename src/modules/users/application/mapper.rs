use crate::modules::users::application::dto::UserModel;
use crate::modules::users::domain::entities::User;

/// Maps domain users into view-ready models.
#[derive(Debug, Clone, Default)]
pub struct UserModelMapper;

impl UserModelMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_model(&self, user: &User) -> UserModel {
        UserModel {
            id: user.id,
            cover_url: user.cover_url.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            followers: user.followers.to_string(),
            description: user.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_every_render_field() {
        let user = User {
            id: 42,
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            followers: 1202,
            description: "First programmer".to_string(),
            cover_url: "https://example.com/covers/42.png".to_string(),
        };

        let model = UserModelMapper::new().to_model(&user);

        assert_eq!(model.id, 42);
        assert_eq!(model.full_name, "Ada Lovelace");
        assert_eq!(model.email, "ada@example.com");
        assert_eq!(model.followers, "1202");
        assert_eq!(model.description, "First programmer");
        assert_eq!(model.cover_url, "https://example.com/covers/42.png");
    }
}
