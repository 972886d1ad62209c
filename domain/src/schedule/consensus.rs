//! Time consensus resolution
//!
//! Builds a sparse histogram over the slots participants actually selected,
//! so cost scales with the number of selections rather than the grid size.

use super::slot::TimeSlotId;
use crate::ranking::order_by_support;
use crate::submission::ParticipantSubmission;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A slot and the number of participants available for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResolution {
    pub slot: TimeSlotId,
    pub support_count: usize,
}

impl TimeResolution {
    pub fn new(slot: TimeSlotId, support_count: usize) -> Self {
        Self {
            slot,
            support_count,
        }
    }

    /// Fraction of `participants` that support this slot (0.0 to 1.0)
    pub fn support_ratio(&self, participants: usize) -> f64 {
        if participants == 0 {
            0.0
        } else {
            self.support_count as f64 / participants as f64
        }
    }

    /// Whether every one of `participants` supports this slot
    pub fn is_unanimous(&self, participants: usize) -> bool {
        participants > 0 && self.support_count == participants
    }
}

/// Ranks time slots by how many participants can attend
///
/// # Example
///
/// ```
/// use rendezvous_domain::{ParticipantSubmission, TimeConsensusResolver, TimeSlotId};
///
/// let submissions = vec![
///     ParticipantSubmission::new("a").with_slots([TimeSlotId::new(0, 2), TimeSlotId::new(0, 3)]),
///     ParticipantSubmission::new("b").with_slots([TimeSlotId::new(0, 2)]),
///     ParticipantSubmission::new("c").with_slots([TimeSlotId::new(1, 0)]),
/// ];
///
/// let ranking = TimeConsensusResolver::resolve(&submissions);
/// assert_eq!(ranking[0].slot, TimeSlotId::new(0, 2));
/// assert_eq!(ranking[0].support_count, 2);
/// ```
pub struct TimeConsensusResolver;

impl TimeConsensusResolver {
    /// Full ranking, most supported first, ties by ascending slot
    ///
    /// Empty input, or input where nobody marked a slot, yields an empty
    /// ranking.
    pub fn resolve(submissions: &[ParticipantSubmission]) -> Vec<TimeResolution> {
        let mut histogram: HashMap<TimeSlotId, usize> = HashMap::new();

        for submission in submissions {
            // availability is a set, so each participant counts once per slot
            for slot in &submission.availability {
                *histogram.entry(*slot).or_default() += 1;
            }
        }

        let mut ranking: Vec<TimeResolution> = histogram
            .into_iter()
            .map(|(slot, count)| TimeResolution::new(slot, count))
            .collect();
        order_by_support(&mut ranking);
        ranking
    }
}
