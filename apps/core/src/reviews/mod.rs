//! Review capture and aggregation: the submission draft with its
//! validation rules, the common-fault ranking, and the optimistic
//! reaction state machine.

pub mod faults;
pub mod reactions;
pub mod taxonomy;

use serde::Serialize;

use crate::errors::{Error, Result};
use crate::models::review::ReviewType;

/// Hard cap enforced before submission; the backend enforces it too.
pub const MAX_REVIEW_PHOTOS: usize = 5;

/// In-progress review being captured for a car.
///
/// `rating` is the 1–5 star input; it exists only to derive the published
/// review's type and is not part of the payload. The `positive_comment` /
/// `negative_comment` pair is carried through even though the default
/// capture path fills only `recommendation` — display surfaces render all
/// three, and remapping them is a product decision, not ours.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub car_id: String,
    /// 0 = not yet rated.
    pub rating: u8,
    pub recommendation: String,
    pub positive_comment: String,
    pub negative_comment: String,
    pub failure_tags: Vec<i64>,
    pub photos: Vec<String>,
    /// Free-text version label; empty means the review is general.
    pub specific_version: String,
}

/// Wire payload for `POST /reviews`. Field names match the backend
/// contract (a mix of snake_case and camelCase, as the API grew).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewPayload {
    pub car_id: String,
    #[serde(rename = "type")]
    pub review_type: ReviewType,
    pub recommendation: String,
    #[serde(rename = "positiveComment")]
    pub positive_comment: String,
    #[serde(rename = "negativeComment")]
    pub negative_comment: String,
    #[serde(rename = "failureTags")]
    pub failure_tags: Vec<i64>,
    pub photos: Vec<String>,
    #[serde(rename = "specificVersion")]
    pub specific_version: String,
}

impl ReviewDraft {
    pub fn new(car_id: impl Into<String>) -> Self {
        ReviewDraft {
            car_id: car_id.into(),
            ..ReviewDraft::default()
        }
    }

    /// Adds or removes a failure tag.
    pub fn toggle_tag(&mut self, tag_id: i64) {
        if let Some(pos) = self.failure_tags.iter().position(|&id| id == tag_id) {
            self.failure_tags.remove(pos);
        } else {
            self.failure_tags.push(tag_id);
        }
    }

    /// Attaches an uploaded photo URL, refusing past the cap.
    pub fn add_photo(&mut self, url: impl Into<String>) -> Result<()> {
        if self.photos.len() >= MAX_REVIEW_PHOTOS {
            return Err(Error::Validation(
                "Solo puedes subir un máximo de 5 fotos por reseña.".to_string(),
            ));
        }
        self.photos.push(url.into());
        Ok(())
    }

    pub fn remove_photo(&mut self, url: &str) {
        self.photos.retain(|p| p != url);
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(Error::Validation(
                "Por favor califica con estrellas".to_string(),
            ));
        }
        if self.photos.len() > MAX_REVIEW_PHOTOS {
            return Err(Error::Validation(
                "Solo puedes subir un máximo de 5 fotos por reseña.".to_string(),
            ));
        }
        if let Some(&bad) = self
            .failure_tags
            .iter()
            .find(|&&id| !taxonomy::is_known_tag(id))
        {
            return Err(Error::Validation(format!(
                "Etiqueta de falla desconocida: {bad}"
            )));
        }
        Ok(())
    }

    /// Validates and produces the wire payload, deriving the review type
    /// from the star rating. The rating itself is dropped here — the
    /// classification is one-way.
    pub fn into_payload(self) -> Result<ReviewPayload> {
        self.validate()?;
        Ok(ReviewPayload {
            review_type: ReviewType::from_rating(self.rating),
            car_id: self.car_id,
            recommendation: self.recommendation,
            positive_comment: self.positive_comment,
            negative_comment: self.negative_comment,
            failure_tags: self.failure_tags,
            photos: self.photos,
            specific_version: self.specific_version,
        })
    }
}
