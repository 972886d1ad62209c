//! Venue reference data

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A candidate meeting place from the venue catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Stable catalog identifier
    pub id: String,
    /// Name shown to participants
    pub display_name: String,
    /// Short code, e.g. a building abbreviation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    pub coordinate: Coordinate,
}

impl Venue {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            abbreviation: None,
            coordinate,
        }
    }

    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Short label: the abbreviation if there is one, otherwise the name
    pub fn short_name(&self) -> &str {
        self.abbreviation.as_deref().unwrap_or(&self.display_name)
    }

    /// Case-insensitive match on name or abbreviation
    ///
    /// An empty query matches every venue.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.display_name.to_lowercase().contains(&query)
            || self
                .abbreviation
                .as_ref()
                .is_some_and(|abbr| abbr.to_lowercase().contains(&query))
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.abbreviation {
            Some(abbr) => write!(f, "{} ({})", self.display_name, abbr),
            None => write!(f, "{}", self.display_name),
        }
    }
}
