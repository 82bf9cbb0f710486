use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review classification derived once, at submission, from the star rating.
/// The rating itself is not part of the persisted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewType {
    Positive,
    Negative,
    Neutral,
}

impl ReviewType {
    /// rating ≥ 4 → positive, rating ≤ 2 → negative, 3 → neutral.
    pub fn from_rating(rating: u8) -> Self {
        if rating >= 4 {
            ReviewType::Positive
        } else if rating <= 2 {
            ReviewType::Negative
        } else {
            ReviewType::Neutral
        }
    }
}

/// A user's vote on a single review. Mutually exclusive and togglable;
/// `None` on the review means the requesting user has not reacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn opposite(self) -> Self {
        match self {
            ReactionKind::Like => ReactionKind::Dislike,
            ReactionKind::Dislike => ReactionKind::Like,
        }
    }
}

/// Weak reference to the review author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

/// A taxonomy entry as it appears on a fetched review: the stable id plus
/// its display name, already resolved by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureTag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPhoto {
    pub id: String,
    pub url: String,
}

/// A published review as the backend returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user: ReviewAuthor,
    #[serde(default, rename = "car_id")]
    pub car_id: String,
    #[serde(rename = "type", default)]
    pub review_type: ReviewType,
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
    /// Which car version the review pertains to. Free text, not a strict
    /// foreign key into `Car::versions` names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_version: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    /// The requesting user's own reaction, if any.
    #[serde(default)]
    pub user_reaction: Option<ReactionKind>,
    #[serde(default, rename = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for ReviewType {
    fn default() -> Self {
        ReviewType::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_rating_boundaries() {
        assert_eq!(ReviewType::from_rating(1), ReviewType::Negative);
        assert_eq!(ReviewType::from_rating(2), ReviewType::Negative);
        assert_eq!(ReviewType::from_rating(3), ReviewType::Neutral);
        assert_eq!(ReviewType::from_rating(4), ReviewType::Positive);
        assert_eq!(ReviewType::from_rating(5), ReviewType::Positive);
    }

    #[test]
    fn test_reaction_wire_names_are_uppercase() {
        assert_eq!(serde_json::to_string(&ReactionKind::Like).unwrap(), "\"LIKE\"");
        assert_eq!(
            serde_json::from_str::<ReactionKind>("\"DISLIKE\"").unwrap(),
            ReactionKind::Dislike
        );
    }

    #[test]
    fn test_review_deserializes_mixed_case_wire() {
        // The wire mixes camelCase and snake_case; car_id and created_at
        // are snake on the backend.
        let review: Review = serde_json::from_str(
            r#"{
                "id": "r1",
                "user": {"id": "u1", "username": "ana"},
                "car_id": "c1",
                "type": "POSITIVE",
                "recommendation": "Muy recomendado",
                "failureTags": [{"id": 2, "name": "Fuga de Aceite"}],
                "photos": [{"id": "p1", "url": "https://cdn.example.com/1.jpg"}],
                "likes": 3,
                "dislikes": 1,
                "userReaction": "LIKE"
            }"#,
        )
        .unwrap();
        assert_eq!(review.car_id, "c1");
        assert_eq!(review.review_type, ReviewType::Positive);
        assert_eq!(review.failure_tags[0].name, "Fuga de Aceite");
        assert_eq!(review.user_reaction, Some(ReactionKind::Like));
        assert!(review.positive_comment.is_empty());
    }
}
