use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, Ignored};
use crate::errors::Result;
use crate::models::car::Car;

#[derive(Serialize)]
struct FavoriteBody<'a> {
    #[serde(rename = "carId")]
    car_id: &'a str,
}

#[derive(Deserialize)]
struct FavoriteStatus {
    #[serde(rename = "isFavorite", default)]
    is_favorite: bool,
}

/// Favorite persistence. Authentication policy lives in
/// `favorites::FavoriteGate`, not here — these calls assume a session
/// and let the backend reject them otherwise.
#[async_trait]
pub trait FavoriteService: Send + Sync {
    async fn add_favorite(&self, car_id: &str) -> Result<()>;
    async fn remove_favorite(&self, car_id: &str) -> Result<()>;
    async fn get_favorites(&self) -> Result<Vec<Car>>;
    async fn check_favorite(&self, car_id: &str) -> Result<bool>;
}

pub struct HttpFavoriteService {
    api: ApiClient,
}

impl HttpFavoriteService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FavoriteService for HttpFavoriteService {
    async fn add_favorite(&self, car_id: &str) -> Result<()> {
        let _: Ignored = self
            .api
            .post("/favorites", &FavoriteBody { car_id })
            .await?;
        Ok(())
    }

    async fn remove_favorite(&self, car_id: &str) -> Result<()> {
        let _: Ignored = self.api.delete(&format!("/favorites/{car_id}")).await?;
        Ok(())
    }

    async fn get_favorites(&self) -> Result<Vec<Car>> {
        let cars: Vec<Car> = self.api.get("/favorites").await?;
        Ok(cars.into_iter().map(crate::catalog::normalize).collect())
    }

    async fn check_favorite(&self, car_id: &str) -> Result<bool> {
        let status: FavoriteStatus = self
            .api
            .get(&format!("/favorites/check/{car_id}"))
            .await?;
        Ok(status.is_favorite)
    }
}
