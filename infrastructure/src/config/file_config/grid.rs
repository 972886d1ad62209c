//! Grid configuration from TOML (`[grid]` section)

use chrono::{NaiveDate, NaiveTime};
use rendezvous_domain::{AvailabilityGrid, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw grid configuration from TOML
///
/// # Example
///
/// ```toml
/// [grid]
/// start_date = "2026-10-19"   # optional, enables dated labels
/// days = 7
/// day_start = "09:00"
/// slot_minutes = 30
/// slots_per_day = 25
/// validate_slots = true       # reject slots outside the grid
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGridConfig {
    pub start_date: Option<String>,
    pub days: u32,
    pub day_start: String,
    pub slot_minutes: u32,
    pub slots_per_day: u32,
    pub validate_slots: bool,
}

impl Default for FileGridConfig {
    fn default() -> Self {
        let grid = AvailabilityGrid::default();
        Self {
            start_date: None,
            days: grid.days,
            day_start: grid.day_start.format("%H:%M").to_string(),
            slot_minutes: grid.slot_minutes,
            slots_per_day: grid.slots_per_day,
            validate_slots: true,
        }
    }
}

impl FileGridConfig {
    /// Convert into a domain grid, returning issues for unusable values.
    ///
    /// Unparsable dates and times fall back to their defaults with a warning;
    /// a grid shape that cannot work is reported as an error.
    pub fn to_grid(&self) -> (AvailabilityGrid, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let defaults = AvailabilityGrid::default();

        let start_date = match &self.start_date {
            None => None,
            Some(raw) => match raw.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::InvalidValue {
                            field: "grid.start_date".to_string(),
                            value: raw.clone(),
                        },
                        format!(
                            "grid.start_date: '{}' is not a YYYY-MM-DD date, ignoring it",
                            raw
                        ),
                    ));
                    None
                }
            },
        };

        let day_start = match parse_clock(&self.day_start) {
            Some(time) => time,
            None => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidValue {
                        field: "grid.day_start".to_string(),
                        value: self.day_start.clone(),
                    },
                    format!(
                        "grid.day_start: '{}' is not an HH:MM time, falling back to '{}'",
                        self.day_start,
                        defaults.day_start.format("%H:%M")
                    ),
                ));
                defaults.day_start
            }
        };

        let mut grid = AvailabilityGrid {
            days: self.days,
            day_start,
            slot_minutes: self.slot_minutes,
            slots_per_day: self.slots_per_day,
            ..defaults
        };
        if let Some(date) = start_date {
            grid = grid.starting_on(date);
        }

        if let Err(e) = grid.validate() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "grid".to_string(),
                    value: format!(
                        "{}x{} @ {} min",
                        self.days, self.slots_per_day, self.slot_minutes
                    ),
                },
                format!("grid: {}", e),
            ));
        }

        (grid, issues)
    }
}

/// Accepts `HH:MM` or `HH:MM:SS`.
fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}
