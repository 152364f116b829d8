use serde::{Deserialize, Serialize};

/// Key naming the subject of a profile fetch. Immutable once bound.
pub type UserId = u32;

/// A user profile as the domain sees it.
///
/// This is also the wire format of the remote profile store; the cache
/// stores it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_url: String,
}
