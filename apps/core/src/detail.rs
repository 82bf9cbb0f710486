//! Assembled data for a car detail view: the normalized car, its reviews,
//! the common-fault ranking and the aggregated gallery, fetched together
//! and kept consistent across review submissions.

use std::sync::Arc;

use crate::errors::Result;
use crate::gallery::{self, AggregatedPhoto};
use crate::models::car::Car;
use crate::models::review::Review;
use crate::reviews::faults::CommonFault;
use crate::reviews::ReviewDraft;
use crate::services::{CarService, ReviewService};

pub struct CarDetail {
    pub car: Car,
    pub reviews: Vec<Review>,
    pub common_faults: Vec<CommonFault>,
    pub photos: Vec<AggregatedPhoto>,
}

impl CarDetail {
    /// Fetches car, reviews and fault ranking concurrently and builds the
    /// gallery sequence.
    pub async fn load(
        cars: &Arc<dyn CarService>,
        reviews: &Arc<dyn ReviewService>,
        car_id: &str,
    ) -> Result<Self> {
        let (car, review_list, common_faults) = tokio::try_join!(
            cars.get_car_by_id(car_id),
            reviews.get_reviews_by_car(car_id),
            reviews.get_common_faults(car_id),
        )?;

        let photos = gallery::aggregate(&car, &review_list);
        Ok(CarDetail {
            car,
            reviews: review_list,
            common_faults,
            photos,
        })
    }

    /// Publishes a review, then refreshes reviews and faults and rebuilds
    /// the gallery from the refreshed list. The photo sequence is never
    /// appended to in place — ordering and fault counts depend on the
    /// complete current review set.
    pub async fn submit_review(
        &mut self,
        reviews: &Arc<dyn ReviewService>,
        draft: ReviewDraft,
    ) -> Result<()> {
        let payload = draft.into_payload()?;
        reviews.create_review(&payload).await?;

        let (review_list, common_faults) = tokio::try_join!(
            reviews.get_reviews_by_car(&self.car.id),
            reviews.get_common_faults(&self.car.id),
        )?;

        self.photos = gallery::aggregate(&self.car, &review_list);
        self.reviews = review_list;
        self.common_faults = common_faults;
        Ok(())
    }

    /// Drops a deleted review locally and recomputes the ranking from the
    /// remaining set, client-side.
    pub fn remove_review(&mut self, review_id: &str) {
        self.reviews.retain(|r| r.id != review_id);
        self.common_faults = crate::reviews::faults::common_faults(&self.reviews);
        self.photos = gallery::aggregate(&self.car, &self.reviews);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::errors::Error;
    use crate::models::car::CarVersion;
    use crate::models::report::ReportReason;
    use crate::models::review::{FailureTag, ReactionKind, ReviewAuthor, ReviewPhoto};
    use crate::reviews::faults;
    use crate::services::{ReactionCounts, UploadedImage};

    struct FakeCarService {
        car: Car,
    }

    #[async_trait]
    impl CarService for FakeCarService {
        async fn get_cars(&self) -> Result<Vec<Car>> {
            Ok(vec![self.car.clone()])
        }
        async fn get_car_by_id(&self, _id: &str) -> Result<Car> {
            Ok(crate::catalog::normalize(self.car.clone()))
        }
        async fn create_car(&self, car: &Car) -> Result<Car> {
            Ok(car.clone())
        }
        async fn update_car(&self, _id: &str, car: &Car) -> Result<Car> {
            Ok(car.clone())
        }
        async fn delete_car(&self, _id: &str) -> Result<()> {
            Ok(())
        }
        async fn get_popular_cars(&self, _limit: usize) -> Result<Vec<Car>> {
            Ok(Vec::new())
        }
        async fn get_related_cars(
            &self,
            _make: &str,
            _model: &str,
            _exclude_id: &str,
        ) -> Result<Vec<Car>> {
            Ok(Vec::new())
        }
    }

    struct FakeReviewService {
        reviews: Mutex<Vec<Review>>,
    }

    #[async_trait]
    impl ReviewService for FakeReviewService {
        async fn create_review(&self, payload: &crate::reviews::ReviewPayload) -> Result<Review> {
            let mut reviews = self.reviews.lock().unwrap();
            let review = Review {
                id: format!("r{}", reviews.len() + 1),
                user: ReviewAuthor {
                    id: "u1".into(),
                    username: "nuevo".into(),
                },
                car_id: payload.car_id.clone(),
                review_type: payload.review_type,
                recommendation: payload.recommendation.clone(),
                failure_tags: payload
                    .failure_tags
                    .iter()
                    .map(|&id| FailureTag {
                        id,
                        name: crate::reviews::taxonomy::tag_name(id)
                            .unwrap_or("?")
                            .to_string(),
                    })
                    .collect(),
                photos: payload
                    .photos
                    .iter()
                    .enumerate()
                    .map(|(i, url)| ReviewPhoto {
                        id: format!("p{i}"),
                        url: url.clone(),
                    })
                    .collect(),
                ..Review::default()
            };
            reviews.push(review.clone());
            Ok(review)
        }

        async fn get_reviews_by_car(&self, _car_id: &str) -> Result<Vec<Review>> {
            Ok(self.reviews.lock().unwrap().clone())
        }

        async fn get_common_faults(&self, _car_id: &str) -> Result<Vec<CommonFault>> {
            Ok(faults::common_faults(&self.reviews.lock().unwrap()))
        }

        async fn toggle_reaction(
            &self,
            _review_id: &str,
            _kind: ReactionKind,
        ) -> Result<ReactionCounts> {
            Ok(ReactionCounts::default())
        }

        async fn report_review(
            &self,
            _review_id: &str,
            _reason: ReportReason,
            _details: &str,
        ) -> Result<()> {
            Ok(())
        }

        async fn delete_review(&self, review_id: &str) -> Result<()> {
            self.reviews.lock().unwrap().retain(|r| r.id != review_id);
            Ok(())
        }

        async fn upload_image(&self, _file_name: String, _data: Vec<u8>) -> Result<UploadedImage> {
            Ok(UploadedImage {
                url: "https://cdn.example.com/up.jpg".into(),
            })
        }
    }

    fn services() -> (Arc<dyn CarService>, Arc<dyn ReviewService>) {
        let car = Car {
            id: "c1".into(),
            make: "Mazda".into(),
            model: "CX-5".into(),
            year: 2021,
            version: "Touring".into(),
            main_image_url: "https://cdn.example.com/cx5.jpg".into(),
            versions: vec![CarVersion {
                name: "Touring".into(),
                specs: Default::default(),
            }],
            ..Car::default()
        };
        (
            Arc::new(FakeCarService { car }),
            Arc::new(FakeReviewService {
                reviews: Mutex::new(Vec::new()),
            }),
        )
    }

    #[tokio::test]
    async fn test_load_builds_gallery_and_ranking() {
        let (cars, reviews) = services();
        let detail = CarDetail::load(&cars, &reviews, "c1").await.unwrap();
        assert_eq!(detail.photos.len(), 1); // main image only
        assert!(detail.common_faults.is_empty());
        assert!(!detail.car.versions.is_empty());
    }

    #[tokio::test]
    async fn test_submit_review_rebuilds_gallery_from_refreshed_list() {
        let (cars, reviews) = services();
        let mut detail = CarDetail::load(&cars, &reviews, "c1").await.unwrap();

        let mut draft = ReviewDraft::new("c1");
        draft.rating = 2;
        draft.toggle_tag(2);
        draft.add_photo("https://cdn.example.com/falla.jpg").unwrap();
        detail.submit_review(&reviews, draft).await.unwrap();

        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.photos.len(), 2); // main + the review photo
        assert_eq!(detail.common_faults[0].name, "Fuga de Aceite");
        assert_eq!(detail.common_faults[0].count, 1);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_service() {
        let (cars, reviews) = services();
        let mut detail = CarDetail::load(&cars, &reviews, "c1").await.unwrap();

        let draft = ReviewDraft::new("c1"); // unrated
        let err = detail.submit_review(&reviews, draft).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(detail.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_remove_review_recomputes_ranking() {
        let (cars, reviews) = services();
        let mut detail = CarDetail::load(&cars, &reviews, "c1").await.unwrap();

        let mut draft = ReviewDraft::new("c1");
        draft.rating = 1;
        draft.toggle_tag(5);
        detail.submit_review(&reviews, draft).await.unwrap();
        assert_eq!(detail.common_faults.len(), 1);

        let id = detail.reviews[0].id.clone();
        detail.remove_review(&id);
        assert!(detail.reviews.is_empty());
        assert!(detail.common_faults.is_empty());
    }
}
