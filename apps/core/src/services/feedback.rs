use async_trait::async_trait;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::feedback::{Feedback, NewFeedback};

#[async_trait]
pub trait FeedbackService: Send + Sync {
    async fn create_feedback(&self, feedback: &NewFeedback) -> Result<Feedback>;
    /// Admin listing of everything submitted.
    async fn get_feedbacks(&self) -> Result<Vec<Feedback>>;
}

pub struct HttpFeedbackService {
    api: ApiClient,
}

impl HttpFeedbackService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FeedbackService for HttpFeedbackService {
    async fn create_feedback(&self, feedback: &NewFeedback) -> Result<Feedback> {
        self.api.post("/feedback", feedback).await
    }

    async fn get_feedbacks(&self) -> Result<Vec<Feedback>> {
        self.api.get("/feedback").await
    }
}
