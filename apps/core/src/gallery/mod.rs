//! Gallery photo aggregation: one ordered sequence merging the official
//! car imagery with community photos pulled from reviews.

use serde::Serialize;

use crate::models::car::Car;
use crate::models::review::Review;

pub const MAIN_PHOTO_CAPTION: &str = "Principal";
const ANONYMOUS_USER: &str = "Usuario";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSource {
    Official,
    User,
}

/// One entry of the aggregated gallery sequence. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPhoto {
    pub url: String,
    #[serde(rename = "type")]
    pub source: PhotoSource,
    pub caption: String,
    /// Username of the contributing reviewer, for community photos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Builds the full gallery sequence for a car detail view.
///
/// Order: main image, official gallery in input order, then review photos
/// in review order. The main image is emitted even when its URL is empty —
/// views track the active photo by URL/index, so dropping it here would
/// shift every index; filtering is the caller's call. URLs are never
/// deduplicated.
///
/// Output length is always `1 + car.photos.len() + Σ review.photos.len()`.
/// After a review submission this must be re-run against the refreshed
/// review list; the sequence is a full rebuild, not an append.
pub fn aggregate(car: &Car, reviews: &[Review]) -> Vec<AggregatedPhoto> {
    let mut photos = Vec::with_capacity(
        1 + car.photos.len() + reviews.iter().map(|r| r.photos.len()).sum::<usize>(),
    );

    photos.push(AggregatedPhoto {
        url: car.main_image_url.clone(),
        source: PhotoSource::Official,
        caption: MAIN_PHOTO_CAPTION.to_string(),
        user: None,
    });

    for photo in &car.photos {
        photos.push(AggregatedPhoto {
            url: photo.url.clone(),
            source: PhotoSource::Official,
            caption: photo.caption.clone().unwrap_or_default(),
            user: None,
        });
    }

    for review in reviews {
        let username = if review.user.username.is_empty() {
            None
        } else {
            Some(review.user.username.clone())
        };
        let caption = format!(
            "Foto de {}",
            username.as_deref().unwrap_or(ANONYMOUS_USER)
        );
        for photo in &review.photos {
            photos.push(AggregatedPhoto {
                url: photo.url.clone(),
                source: PhotoSource::User,
                caption: caption.clone(),
                user: username.clone(),
            });
        }
    }

    photos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::car::CarPhoto;
    use crate::models::review::{ReviewAuthor, ReviewPhoto};

    fn car_with_photos(main: &str, gallery: &[&str]) -> Car {
        Car {
            main_image_url: main.to_string(),
            photos: gallery
                .iter()
                .map(|url| CarPhoto {
                    url: url.to_string(),
                    caption: None,
                })
                .collect(),
            ..Car::default()
        }
    }

    fn review_with_photos(username: &str, urls: &[&str]) -> Review {
        Review {
            user: ReviewAuthor {
                id: "u".into(),
                username: username.to_string(),
            },
            photos: urls
                .iter()
                .enumerate()
                .map(|(i, url)| ReviewPhoto {
                    id: format!("p{i}"),
                    url: url.to_string(),
                })
                .collect(),
            ..Review::default()
        }
    }

    #[test]
    fn test_length_invariant_holds() {
        let car = car_with_photos("main.jpg", &["a.jpg", "b.jpg"]);
        let reviews = vec![
            review_with_photos("ana", &["r1.jpg"]),
            review_with_photos("beto", &["r2.jpg", "r3.jpg"]),
        ];
        let photos = aggregate(&car, &reviews);
        assert_eq!(photos.len(), 1 + 2 + 3);
    }

    #[test]
    fn test_ordering_official_then_user() {
        let car = car_with_photos("main.jpg", &["a.jpg"]);
        let reviews = vec![review_with_photos("ana", &["r1.jpg"])];
        let photos = aggregate(&car, &reviews);

        assert_eq!(photos[0].url, "main.jpg");
        assert_eq!(photos[0].caption, MAIN_PHOTO_CAPTION);
        assert_eq!(photos[0].source, PhotoSource::Official);
        assert_eq!(photos[1].url, "a.jpg");
        assert_eq!(photos[1].source, PhotoSource::Official);
        assert_eq!(photos[2].url, "r1.jpg");
        assert_eq!(photos[2].source, PhotoSource::User);
        assert_eq!(photos[2].caption, "Foto de ana");
        assert_eq!(photos[2].user.as_deref(), Some("ana"));
    }

    #[test]
    fn test_empty_main_image_still_emitted() {
        let car = car_with_photos("", &[]);
        let photos = aggregate(&car, &[]);
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].url, "");
    }

    #[test]
    fn test_anonymous_reviewer_gets_fallback_caption() {
        let car = car_with_photos("main.jpg", &[]);
        let reviews = vec![review_with_photos("", &["r1.jpg"])];
        let photos = aggregate(&car, &reviews);
        assert_eq!(photos[1].caption, "Foto de Usuario");
        assert!(photos[1].user.is_none());
    }

    #[test]
    fn test_duplicate_urls_are_kept() {
        let car = car_with_photos("same.jpg", &["same.jpg"]);
        let reviews = vec![review_with_photos("ana", &["same.jpg"])];
        assert_eq!(aggregate(&car, &reviews).len(), 3);
    }

    #[test]
    fn test_empty_reviews_list() {
        let car = car_with_photos("main.jpg", &["a.jpg"]);
        assert_eq!(aggregate(&car, &[]).len(), 2);
    }
}
