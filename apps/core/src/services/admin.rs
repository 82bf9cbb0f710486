use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::client::{ApiClient, Ignored};
use crate::errors::Result;
use crate::models::report::Report;
use crate::models::user::User;

/// Site-wide totals for the moderation dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_cars: i64,
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_reports: i64,
    #[serde(default)]
    pub total_reviews: i64,
}

/// Moderation data operations. All of these require an admin session;
/// the backend answers 403 otherwise, which surfaces as
/// `Error::AuthenticationRequired`.
#[async_trait]
pub trait AdminService: Send + Sync {
    async fn get_dashboard_stats(&self) -> Result<DashboardStats>;
    async fn get_all_users(&self) -> Result<Vec<User>>;
    async fn get_reported_reviews(&self) -> Result<Vec<Report>>;
    /// Closes the report and keeps the review.
    async fn dismiss_report(&self, report_id: &str) -> Result<()>;
    /// Deletes the reported review; the backend cascades the report.
    async fn delete_reported_review(&self, report_id: &str) -> Result<()>;
}

pub struct HttpAdminService {
    api: ApiClient,
}

impl HttpAdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AdminService for HttpAdminService {
    async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.api.get("/admin/stats").await
    }

    async fn get_all_users(&self) -> Result<Vec<User>> {
        self.api.get("/users").await
    }

    async fn get_reported_reviews(&self) -> Result<Vec<Report>> {
        self.api.get("/reviews/reports").await
    }

    async fn dismiss_report(&self, report_id: &str) -> Result<()> {
        let _: Ignored = self
            .api
            .patch(&format!("/reviews/reports/{report_id}/dismiss"))
            .await?;
        info!("dismissed report {report_id}");
        Ok(())
    }

    async fn delete_reported_review(&self, report_id: &str) -> Result<()> {
        let _: Ignored = self
            .api
            .delete(&format!("/reviews/reports/{report_id}/review"))
            .await?;
        info!("deleted review behind report {report_id}");
        Ok(())
    }
}
