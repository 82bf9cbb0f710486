use async_trait::async_trait;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::review::Review;
use crate::models::user::{ProfileStats, PublicProfile};

#[async_trait]
pub trait UserService: Send + Sync {
    /// Counters for the logged-in user's own profile.
    async fn get_profile_stats(&self) -> Result<ProfileStats>;
    async fn get_profile_reviews(&self) -> Result<Vec<Review>>;
    async fn get_public_profile(&self, user_id: &str) -> Result<PublicProfile>;
    async fn get_public_stats(&self, user_id: &str) -> Result<ProfileStats>;
}

pub struct HttpUserService {
    api: ApiClient,
}

impl HttpUserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserService for HttpUserService {
    async fn get_profile_stats(&self) -> Result<ProfileStats> {
        self.api.get("/users/profile/stats").await
    }

    async fn get_profile_reviews(&self) -> Result<Vec<Review>> {
        self.api.get("/users/profile/reviews").await
    }

    async fn get_public_profile(&self, user_id: &str) -> Result<PublicProfile> {
        self.api.get(&format!("/users/{user_id}")).await
    }

    async fn get_public_stats(&self, user_id: &str) -> Result<ProfileStats> {
        self.api.get(&format!("/users/{user_id}/stats")).await
    }
}
