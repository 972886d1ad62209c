//! Availability grid description
//!
//! The grid shape belongs to the meeting's configuration. The resolvers treat
//! slot ids as opaque pairs and never consult it; callers use it to validate
//! submissions and to turn slot ids back into human-readable times.

use super::slot::TimeSlotId;
use crate::core::error::DomainError;
use chrono::{Days, NaiveDate, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Shape of a meeting's availability grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvailabilityGrid {
    /// Calendar date of day 0, if the meeting is pinned to dates
    #[serde(alias = "start_date")]
    pub start_date: Option<NaiveDate>,
    /// Number of days (columns)
    pub days: u32,
    /// Start time of slot 0 on every day
    #[serde(alias = "day_start")]
    pub day_start: NaiveTime,
    /// Length of one slot
    #[serde(alias = "slot_minutes")]
    pub slot_minutes: u32,
    /// Number of slots (rows) per day
    #[serde(alias = "slots_per_day")]
    pub slots_per_day: u32,
}

impl Default for AvailabilityGrid {
    /// One week, 9:00 AM to 9:00 PM in 30-minute slots
    fn default() -> Self {
        Self {
            start_date: None,
            days: 7,
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            slot_minutes: 30,
            slots_per_day: 25,
        }
    }
}

impl AvailabilityGrid {
    /// Pin day 0 to a calendar date
    pub fn starting_on(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Check the grid has a usable shape that stays within one day
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.days == 0 {
            return Err(DomainError::InvalidGrid("days must be at least 1".to_string()));
        }
        if self.slots_per_day == 0 {
            return Err(DomainError::InvalidGrid(
                "slots_per_day must be at least 1".to_string(),
            ));
        }
        if self.slot_minutes == 0 {
            return Err(DomainError::InvalidGrid(
                "slot_minutes must be at least 1".to_string(),
            ));
        }

        let start = self.day_start.hour() * 60 + self.day_start.minute();
        let span = u64::from(self.slot_minutes) * u64::from(self.slots_per_day);
        if u64::from(start) + span > u64::from(MINUTES_PER_DAY) {
            return Err(DomainError::InvalidGrid(format!(
                "{} slots of {} minutes from {} run past midnight",
                self.slots_per_day,
                self.slot_minutes,
                self.day_start.format("%H:%M")
            )));
        }

        Ok(())
    }

    /// Whether the slot lies inside the grid
    pub fn contains(&self, slot: &TimeSlotId) -> bool {
        slot.day_index < self.days && slot.time_index < self.slots_per_day
    }

    /// Wall-clock start of a slot, or `None` outside the grid
    pub fn slot_start(&self, slot: &TimeSlotId) -> Option<NaiveTime> {
        if !self.contains(slot) {
            return None;
        }
        let offset = TimeDelta::minutes(i64::from(slot.time_index) * i64::from(self.slot_minutes));
        let (start, wrapped) = self.day_start.overflowing_add_signed(offset);
        (wrapped == 0).then_some(start)
    }

    /// Calendar date of a slot, when the grid is pinned to dates
    pub fn slot_date(&self, slot: &TimeSlotId) -> Option<NaiveDate> {
        if !self.contains(slot) {
            return None;
        }
        self.start_date?
            .checked_add_days(Days::new(u64::from(slot.day_index)))
    }

    /// Human-readable label, e.g. `"Mon, Oct 19 9:30 AM"` or `"Day 1 9:30 AM"`
    ///
    /// Out-of-grid slots fall back to the raw `day-time` key.
    pub fn label(&self, slot: &TimeSlotId) -> String {
        let Some(start) = self.slot_start(slot) else {
            return format!("slot {}", slot);
        };
        let time = start.format("%-I:%M %p");

        match self.slot_date(slot) {
            Some(date) => format!("{} {}", date.format("%a, %b %-d"), time),
            None => format!("Day {} {}", slot.day_index + 1, time),
        }
    }
}
