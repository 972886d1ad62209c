//! Ranking and tie-break utilities
//!
//! The resolvers always produce one deterministic primary ordering. Anything
//! that narrows or re-orders that ranking (top-K, tie handling, equity
//! preference) lives here and is applied by the caller.

pub mod policy;

pub use policy::{LocationPolicy, TimePolicy};

use crate::schedule::TimeResolution;
use crate::venue::LocationScore;
use std::cmp::Ordering;

/// Descending support, then ascending slot
pub fn order_by_support(ranking: &mut [TimeResolution]) {
    ranking.sort_by(|a, b| {
        b.support_count
            .cmp(&a.support_count)
            .then_with(|| a.slot.cmp(&b.slot))
    });
}

/// Ascending average distance, then ascending venue id
pub fn order_by_average_distance(scores: &mut [LocationScore]) {
    scores.sort_by(|a, b| {
        a.average_distance_meters
            .total_cmp(&b.average_distance_meters)
            .then_with(|| a.venue.id.cmp(&b.venue.id))
    });
}

/// Ascending fairness gap, then ascending average, then venue id
pub fn order_by_fairness_gap(scores: &mut [LocationScore]) {
    scores.sort_by(|a, b| {
        a.fairness_gap
            .total_cmp(&b.fairness_gap)
            .then_with(|| compare_average(a, b))
            .then_with(|| a.venue.id.cmp(&b.venue.id))
    });
}

fn compare_average(a: &LocationScore, b: &LocationScore) -> Ordering {
    a.average_distance_meters
        .total_cmp(&b.average_distance_meters)
}

/// The co-maximal prefix of a support-ordered ranking
pub fn leading_ties(ranking: &[TimeResolution]) -> &[TimeResolution] {
    let Some(first) = ranking.first() else {
        return &[];
    };
    let end = ranking
        .iter()
        .position(|r| r.support_count != first.support_count)
        .unwrap_or(ranking.len());
    &ranking[..end]
}

/// The first `k` entries, or all of them when `k` is `None`
pub fn top_k<T>(ranking: &[T], k: Option<usize>) -> &[T] {
    match k {
        Some(k) => &ranking[..k.min(ranking.len())],
        None => ranking,
    }
}
