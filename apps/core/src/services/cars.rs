use async_trait::async_trait;
use tracing::info;

use crate::catalog;
use crate::client::{ApiClient, Ignored};
use crate::errors::Result;
use crate::models::car::Car;

/// Car catalog operations. Every read normalizes legacy records on the
/// way in, so consumers always see `versions.len() >= 1`.
#[async_trait]
pub trait CarService: Send + Sync {
    async fn get_cars(&self) -> Result<Vec<Car>>;
    async fn get_car_by_id(&self, id: &str) -> Result<Car>;
    /// Admin only. `car` is expected to come out of
    /// `CarDraft::prepare_for_submission`, which mirrors `versions[0]`
    /// into the legacy root fields.
    async fn create_car(&self, car: &Car) -> Result<Car>;
    async fn update_car(&self, id: &str, car: &Car) -> Result<Car>;
    /// Admin only. Review/photo cascade is enforced by the backend.
    async fn delete_car(&self, id: &str) -> Result<()>;
    async fn get_popular_cars(&self, limit: usize) -> Result<Vec<Car>>;
    async fn get_related_cars(&self, make: &str, model: &str, exclude_id: &str)
        -> Result<Vec<Car>>;
}

pub struct HttpCarService {
    api: ApiClient,
}

impl HttpCarService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CarService for HttpCarService {
    async fn get_cars(&self) -> Result<Vec<Car>> {
        let cars: Vec<Car> = self.api.get("/cars").await?;
        Ok(cars.into_iter().map(catalog::normalize).collect())
    }

    async fn get_car_by_id(&self, id: &str) -> Result<Car> {
        let car: Car = self.api.get(&format!("/cars/{id}")).await?;
        Ok(catalog::normalize(car))
    }

    async fn create_car(&self, car: &Car) -> Result<Car> {
        let created: Car = self.api.post("/cars", car).await?;
        info!("created car {} {} {}", created.make, created.model, created.year);
        Ok(catalog::normalize(created))
    }

    async fn update_car(&self, id: &str, car: &Car) -> Result<Car> {
        let updated: Car = self.api.put(&format!("/cars/{id}"), car).await?;
        Ok(catalog::normalize(updated))
    }

    async fn delete_car(&self, id: &str) -> Result<()> {
        let _: Ignored = self.api.delete(&format!("/cars/{id}")).await?;
        info!("deleted car {id}");
        Ok(())
    }

    async fn get_popular_cars(&self, limit: usize) -> Result<Vec<Car>> {
        let limit = limit.to_string();
        let cars: Vec<Car> = self
            .api
            .get_query("/cars/popular", &[("limit", limit.as_str())])
            .await?;
        Ok(cars.into_iter().map(catalog::normalize).collect())
    }

    async fn get_related_cars(
        &self,
        make: &str,
        model: &str,
        exclude_id: &str,
    ) -> Result<Vec<Car>> {
        let cars: Vec<Car> = self
            .api
            .get_query(
                "/cars/related",
                &[("make", make), ("model", model), ("currentId", exclude_id)],
            )
            .await?;
        Ok(cars.into_iter().map(catalog::normalize).collect())
    }
}
