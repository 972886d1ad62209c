//! Combined meeting resolution value object

use crate::geo::Coordinate;
use crate::schedule::{AvailabilityGrid, TimeResolution};
use crate::venue::{LocationScore, Venue};
use serde::{Deserialize, Serialize};

/// Everything decided for one meeting
///
/// `times` and `locations` hold the ranked (and possibly truncated) lists;
/// `chosen_times` is what the time policy selected from `times`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingResolution {
    pub meeting_id: String,
    /// Grid the slots were checked against, used to label them
    #[serde(default)]
    pub grid: AvailabilityGrid,
    /// Number of submissions in the snapshot
    pub participant_count: usize,
    /// Number of submissions that carried a location
    pub located_count: usize,
    pub times: Vec<TimeResolution>,
    pub chosen_times: Vec<TimeResolution>,
    pub locations: Vec<LocationScore>,
    /// Mean of participant coordinates, for reference on a map
    pub center: Option<Coordinate>,
    /// Catalog venue closest to `center`
    pub nearest_to_center: Option<Venue>,
}

impl MeetingResolution {
    /// The first chosen slot, if any
    pub fn best_time(&self) -> Option<&TimeResolution> {
        self.chosen_times.first()
    }

    /// The top venue under the applied location policy
    pub fn best_location(&self) -> Option<&LocationScore> {
        self.locations.first()
    }

    /// Whether neither a time nor a place could be proposed
    pub fn is_undecided(&self) -> bool {
        self.chosen_times.is_empty() && self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TimeSlotId;

    #[test]
    fn test_empty_resolution() {
        let resolution = MeetingResolution::default();
        assert!(resolution.is_undecided());
        assert!(resolution.best_time().is_none());
        assert!(resolution.best_location().is_none());
    }

    #[test]
    fn test_best_time() {
        let mut resolution = MeetingResolution::default();
        resolution.chosen_times = vec![TimeResolution::new(TimeSlotId::new(0, 2), 2)];
        assert_eq!(resolution.best_time().unwrap().support_count, 2);
        assert!(!resolution.is_undecided());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(MeetingResolution::default()).unwrap();
        assert_eq!(json["meetingId"], "");
        assert!(json["chosenTimes"].as_array().unwrap().is_empty());
    }
}
