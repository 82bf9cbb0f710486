use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::review::Review;

/// Aggregated count of how often a failure tag appears across a car's
/// reviews. Recomputed from the full review set on every fetch — nothing
/// is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonFault {
    pub name: String,
    pub count: u64,
}

/// Ranks failure tags by frequency across the given reviews.
///
/// Tags are grouped by display name and sorted by descending count; ties
/// keep first-seen order (stable and deterministic across recomputes of
/// the same review list). Tags no review carries simply never appear —
/// there are no zero-count entries.
pub fn common_faults(reviews: &[Review]) -> Vec<CommonFault> {
    let mut counts: Vec<CommonFault> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for review in reviews {
        for tag in &review.failure_tags {
            match index_by_name.get(tag.name.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index_by_name.insert(tag.name.clone(), counts.len());
                    counts.push(CommonFault {
                        name: tag.name.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
