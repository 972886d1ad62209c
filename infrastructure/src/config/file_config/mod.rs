//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain and application
//! types, collecting [`ConfigIssue`]s along the way.

mod grid;
mod output;
mod resolution;
mod venues;

pub use grid::FileGridConfig;
pub use output::FileOutputConfig;
pub use resolution::FileResolutionConfig;
pub use venues::{FileVenue, FileVenuesConfig};

use rendezvous_application::ResolutionSettings;
use rendezvous_domain::{ConfigIssue, Venue};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Availability grid shape
    pub grid: FileGridConfig,
    /// Ranking policies and truncation
    pub resolution: FileResolutionConfig,
    /// Venue catalog
    pub venues: FileVenuesConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.grid.to_grid().1);
        issues.extend(self.resolution.parse_top_k().1);
        issues.extend(self.resolution.parse_time_policy().1);
        issues.extend(self.resolution.parse_location_policy().1);
        issues.extend(self.venues.to_venues().1);
        issues
    }

    /// Resolution settings with invalid values replaced by defaults
    pub fn to_settings(&self) -> ResolutionSettings {
        ResolutionSettings {
            grid: self.grid.to_grid().0,
            validate_slots: self.grid.validate_slots,
            top_k: self.resolution.parse_top_k().0,
            time_policy: self.resolution.parse_time_policy().0,
            location_policy: self.resolution.parse_location_policy().0,
        }
    }

    /// The effective venue catalog
    pub fn to_venues(&self) -> Vec<Venue> {
        self.venues.to_venues().0
    }
}
