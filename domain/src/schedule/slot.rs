//! Time slot identifier

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One cell of the availability grid (Value Object)
///
/// Ordering is by day, then by time within the day, which is also the
/// tie-break order used when ranking slots.
///
/// # Example
///
/// ```
/// use rendezvous_domain::schedule::TimeSlotId;
///
/// let slot: TimeSlotId = "0-2".parse().unwrap();
/// assert_eq!(slot, TimeSlotId::new(0, 2));
/// assert!(TimeSlotId::new(0, 9) < TimeSlotId::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotId {
    pub day_index: u32,
    pub time_index: u32,
}

impl TimeSlotId {
    pub fn new(day_index: u32, time_index: u32) -> Self {
        Self {
            day_index,
            time_index,
        }
    }
}

impl std::fmt::Display for TimeSlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.day_index, self.time_index)
    }
}

impl std::str::FromStr for TimeSlotId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidTimeSlot(format!("expected 'day-time', got '{}'", s)))?;

        let day_index = day
            .parse()
            .map_err(|_| DomainError::InvalidTimeSlot(format!("invalid day index in '{}'", s)))?;
        let time_index = time
            .parse()
            .map_err(|_| DomainError::InvalidTimeSlot(format!("invalid time index in '{}'", s)))?;

        Ok(Self::new(day_index, time_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_day_then_time() {
        let mut slots = vec![
            TimeSlotId::new(1, 0),
            TimeSlotId::new(0, 3),
            TimeSlotId::new(0, 2),
        ];
        slots.sort();
        assert_eq!(
            slots,
            vec![
                TimeSlotId::new(0, 2),
                TimeSlotId::new(0, 3),
                TimeSlotId::new(1, 0)
            ]
        );
    }

    #[test]
    fn test_display_matches_legacy_key() {
        assert_eq!(TimeSlotId::new(3, 14).to_string(), "3-14");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("3".parse::<TimeSlotId>().is_err());
        assert!("a-1".parse::<TimeSlotId>().is_err());
        assert!("1--1".parse::<TimeSlotId>().is_err());
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_string(&TimeSlotId::new(0, 2)).unwrap();
        assert_eq!(json, r#"{"dayIndex":0,"timeIndex":2}"#);
    }
}
