//! Resolution configuration from TOML (`[resolution]` section)

use rendezvous_domain::{ConfigIssue, ConfigIssueCode, LocationPolicy, TimePolicy};
use serde::{Deserialize, Serialize};

/// Raw resolution configuration from TOML
///
/// # Example
///
/// ```toml
/// [resolution]
/// top_k = 5                          # omit to keep full rankings
/// time_policy = "earliest"           # "earliest" or "all-tied"
/// location_policy = "best-average"   # "best-average" or "most-equitable"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResolutionConfig {
    pub top_k: Option<usize>,
    pub time_policy: String,
    pub location_policy: String,
}

impl Default for FileResolutionConfig {
    fn default() -> Self {
        Self {
            top_k: None,
            time_policy: TimePolicy::default().to_string(),
            location_policy: LocationPolicy::default().to_string(),
        }
    }
}

impl FileResolutionConfig {
    /// Parse time_policy string into TimePolicy enum, returning warnings on failure.
    pub fn parse_time_policy(&self) -> (TimePolicy, Vec<ConfigIssue>) {
        match self.time_policy.parse::<TimePolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "resolution.time_policy".to_string(),
                        value: self.time_policy.clone(),
                        valid_values: vec!["earliest".to_string(), "all-tied".to_string()],
                    },
                    format!(
                        "resolution.time_policy: unknown value '{}', falling back to '{}'",
                        self.time_policy,
                        TimePolicy::default()
                    ),
                );
                (TimePolicy::default(), vec![issue])
            }
        }
    }

    /// Parse location_policy string into LocationPolicy enum, returning warnings on failure.
    pub fn parse_location_policy(&self) -> (LocationPolicy, Vec<ConfigIssue>) {
        match self.location_policy.parse::<LocationPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "resolution.location_policy".to_string(),
                        value: self.location_policy.clone(),
                        valid_values: vec![
                            "best-average".to_string(),
                            "most-equitable".to_string(),
                        ],
                    },
                    format!(
                        "resolution.location_policy: unknown value '{}', falling back to '{}'",
                        self.location_policy,
                        LocationPolicy::default()
                    ),
                );
                (LocationPolicy::default(), vec![issue])
            }
        }
    }

    /// `top_k = 0` would hide every result; treat it as unset.
    pub fn parse_top_k(&self) -> (Option<usize>, Vec<ConfigIssue>) {
        match self.top_k {
            Some(0) => (
                None,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidValue {
                        field: "resolution.top_k".to_string(),
                        value: "0".to_string(),
                    },
                    "resolution.top_k: 0 would hide every result, ignoring it",
                )],
            ),
            other => (other, vec![]),
        }
    }
}
