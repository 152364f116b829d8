use serde::{Deserialize, Serialize};

use crate::modules::users::domain::entities::UserId;

/// Presentation-shaped projection of a user profile.
///
/// Created fresh per successful fetch; the view renders it as-is and
/// never reaches back into the domain entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: UserId,
    pub cover_url: String,
    pub full_name: String,
    pub email: String,
    /// Preformatted for display.
    pub followers: String,
    pub description: String,
}
