use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Site feedback submitted from the standalone feedback page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default)]
    pub id: String,
    /// Free-form category chosen by the user (suggestion, bug, ...).
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating feedback; the id and timestamp are server-assigned.
#[derive(Debug, Clone, Serialize)]
pub struct NewFeedback {
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub message: String,
}
