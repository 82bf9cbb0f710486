use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::{ApiClient, Ignored};
use crate::errors::Result;
use crate::models::report::ReportReason;
use crate::models::review::{ReactionKind, Review};
use crate::reviews::faults::CommonFault;
use crate::reviews::ReviewPayload;

/// Server-confirmed counters returned by a reaction toggle. Feed these to
/// `ReactionState::reconcile` so local optimistic counts converge on the
/// backend's truth.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionCounts {
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub user_reaction: Option<ReactionKind>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

#[derive(Serialize)]
struct ReactionBody {
    #[serde(rename = "type")]
    kind: ReactionKind,
}

#[derive(Serialize)]
struct ReportBody<'a> {
    reason: ReportReason,
    details: &'a str,
}

#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn create_review(&self, payload: &ReviewPayload) -> Result<Review>;
    async fn get_reviews_by_car(&self, car_id: &str) -> Result<Vec<Review>>;
    /// Server-side variant of `reviews::faults::common_faults`; both
    /// produce the same ranking.
    async fn get_common_faults(&self, car_id: &str) -> Result<Vec<CommonFault>>;
    async fn toggle_reaction(&self, review_id: &str, kind: ReactionKind)
        -> Result<ReactionCounts>;
    async fn report_review(
        &self,
        review_id: &str,
        reason: ReportReason,
        details: &str,
    ) -> Result<()>;
    /// Author or admin only; the backend checks ownership.
    async fn delete_review(&self, review_id: &str) -> Result<()>;
    async fn upload_image(&self, file_name: String, data: Vec<u8>) -> Result<UploadedImage>;
}

pub struct HttpReviewService {
    api: ApiClient,
}

impl HttpReviewService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReviewService for HttpReviewService {
    async fn create_review(&self, payload: &ReviewPayload) -> Result<Review> {
        let review: Review = self.api.post("/reviews", payload).await?;
        info!("published review {} for car {}", review.id, review.car_id);
        Ok(review)
    }

    async fn get_reviews_by_car(&self, car_id: &str) -> Result<Vec<Review>> {
        self.api.get(&format!("/reviews/car/{car_id}")).await
    }

    async fn get_common_faults(&self, car_id: &str) -> Result<Vec<CommonFault>> {
        self.api.get(&format!("/reviews/car/{car_id}/faults")).await
    }

    async fn toggle_reaction(
        &self,
        review_id: &str,
        kind: ReactionKind,
    ) -> Result<ReactionCounts> {
        self.api
            .post(
                &format!("/reviews/{review_id}/reaction"),
                &ReactionBody { kind },
            )
            .await
    }

    async fn report_review(
        &self,
        review_id: &str,
        reason: ReportReason,
        details: &str,
    ) -> Result<()> {
        let _: Ignored = self
            .api
            .post(
                &format!("/reviews/{review_id}/report"),
                &ReportBody { reason, details },
            )
            .await?;
        info!("reported review {review_id}");
        Ok(())
    }

    async fn delete_review(&self, review_id: &str) -> Result<()> {
        let _: Ignored = self.api.delete(&format!("/reviews/{review_id}")).await?;
        Ok(())
    }

    async fn upload_image(&self, file_name: String, data: Vec<u8>) -> Result<UploadedImage> {
        self.api
            .post_multipart("/upload", "image", file_name, data)
            .await
    }
}
