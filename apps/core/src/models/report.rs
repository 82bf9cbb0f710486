use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::review::{FailureTag, ReviewAuthor, ReviewPhoto};
use crate::models::user::User;

/// Why a review was reported. Wire values are the Spanish labels the
/// backend stores verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportReason {
    Spam,
    #[serde(rename = "Contenido Ofensivo")]
    OffensiveContent,
    #[serde(rename = "Información Falsa")]
    FalseInformation,
    #[serde(rename = "Acoso")]
    Harassment,
    #[serde(rename = "Otro")]
    Other,
}

impl ReportReason {
    pub const ALL: [ReportReason; 5] = [
        ReportReason::Spam,
        ReportReason::OffensiveContent,
        ReportReason::FalseInformation,
        ReportReason::Harassment,
        ReportReason::Other,
    ];
}

/// Minimal car reference embedded in a reported review snapshot, enough
/// for the moderation view to link back to the listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportedCarRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: i32,
}

/// Snapshot of the offending review embedded in a report. Kept separate
/// from `Review`: the snapshot carries a car reference and no reaction
/// counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedReview {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user: ReviewAuthor,
    #[serde(default)]
    pub car: Option<ReportedCarRef>,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub positive_comment: String,
    #[serde(default)]
    pub negative_comment: String,
    #[serde(default)]
    pub failure_tags: Vec<FailureTag>,
    #[serde(default)]
    pub photos: Vec<ReviewPhoto>,
    #[serde(default, rename = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A moderation report. Mutated only through the admin operations
/// (dismiss, or cascade-delete the offending review).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub reason: ReportReason,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub status: String,
    pub review: ReportedReview,
    /// The reporter.
    #[serde(default)]
    pub user: Option<User>,
}
