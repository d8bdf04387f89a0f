//! Derived rating aggregation.
//!
//! A title's rating is the arithmetic mean of its review scores, rounded
//! half-up to an integer, or absent when the title has no reviews. It is
//! recomputed from the current review set on every read and never stored.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::review::Score;

/// Aggregated title rating on the review score scale (1..=10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Computes the mean of `scores` rounded half-up, or `None` for an empty set.
pub fn mean_rating(scores: &[Score]) -> Option<Rating> {
    if scores.is_empty() {
        return None;
    }
    let sum: u32 = scores.iter().map(|s| u32::from(s.value())).sum();
    let n = scores.len() as u32;
    // Integer half-up rounding; scores are bounded so this cannot overflow.
    let mean = (2 * sum + n) / (2 * n);
    Some(Rating(mean as u8))
}

/// Sort key for title listings that order by rating.
///
/// Rated titles sort above unrated ones, higher ratings first; ties fall
/// through to the caller's stable secondary key.
pub fn rating_ordering(a: Option<Rating>, b: Option<Rating>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
