use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Aggregate counters shown on a user's own profile page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub favorites_count: i64,
    #[serde(default)]
    pub likes_count: i64,
}

/// Public-facing subset for another user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicProfile {
    #[serde(default)]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role: Role,
}
