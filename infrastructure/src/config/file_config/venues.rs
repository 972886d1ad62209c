//! Venue catalog configuration from TOML (`[venues]` section)

use crate::venues::builtin_campus_venues;
use rendezvous_domain::{ConfigIssue, ConfigIssueCode, Coordinate, Venue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw venue catalog configuration from TOML
///
/// # Example
///
/// ```toml
/// [venues]
/// use_builtin = true   # start from the built-in campus buildings
///
/// [[venues.catalog]]
/// id = "corec"
/// name = "France A. Córdova Recreational Sports Center"
/// abbr = "CREC"
/// lat = 40.4283
/// lng = -86.9223
/// ```
///
/// Entries whose id matches a built-in venue replace it. Any later entry
/// with an id already seen is skipped with a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVenuesConfig {
    pub use_builtin: bool,
    pub catalog: Vec<FileVenue>,
}

impl Default for FileVenuesConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            catalog: Vec::new(),
        }
    }
}

/// One `[[venues.catalog]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileVenue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub abbr: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl FileVenue {
    fn to_venue(&self) -> Result<Venue, ConfigIssue> {
        let coordinate = Coordinate::new(self.lat, self.lng).map_err(|e| {
            ConfigIssue::warning(
                ConfigIssueCode::InvalidVenue {
                    id: self.id.clone(),
                },
                format!("venues.catalog '{}': {}, skipping it", self.id, e),
            )
        })?;

        let venue = Venue::new(self.id.clone(), self.name.clone(), coordinate);
        Ok(match &self.abbr {
            Some(abbr) => venue.with_abbreviation(abbr.clone()),
            None => venue,
        })
    }
}

impl FileVenuesConfig {
    /// Build the effective catalog, returning issues for skipped entries.
    pub fn to_venues(&self) -> (Vec<Venue>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut venues = if self.use_builtin {
            builtin_campus_venues()
        } else {
            Vec::new()
        };
        let builtin_count = venues.len();
        let mut overridden: HashSet<String> = HashSet::new();

        for entry in &self.catalog {
            let venue = match entry.to_venue() {
                Ok(venue) => venue,
                Err(issue) => {
                    issues.push(issue);
                    continue;
                }
            };

            match venues.iter().position(|v| v.id == venue.id) {
                Some(index) if index < builtin_count && !overridden.contains(&venue.id) => {
                    overridden.insert(venue.id.clone());
                    venues[index] = venue;
                }
                Some(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateVenue {
                        id: venue.id.clone(),
                    },
                    format!("venues.catalog: duplicate id '{}', keeping the first", venue.id),
                )),
                None => venues.push(venue),
            }
        }

        if venues.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyVenueCatalog,
                "venues: catalog is empty (use_builtin = false and no valid [[venues.catalog]] entries)",
            ));
        }

        (venues, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, lat: f64, lng: f64) -> FileVenue {
        FileVenue {
            id: id.to_string(),
            name: id.to_uppercase(),
            abbr: None,
            lat,
            lng,
        }
    }

    #[test]
    fn test_default_is_builtin() {
        let (venues, issues) = FileVenuesConfig::default().to_venues();
        assert!(issues.is_empty());
        assert_eq!(venues.len(), builtin_campus_venues().len());
    }

    #[test]
    fn test_custom_entries_extend_and_override() {
        let config = FileVenuesConfig {
            use_builtin: true,
            catalog: vec![entry("1", 40.0, -86.0), entry("new", 40.1, -86.1)],
        };
        let (venues, issues) = config.to_venues();
        assert!(issues.is_empty());
        assert_eq!(venues.len(), builtin_campus_venues().len() + 1);
        let replaced = venues.iter().find(|v| v.id == "1").unwrap();
        assert_eq!(replaced.coordinate.lat(), 40.0);
    }

    #[test]
    fn test_invalid_entry_skipped() {
        let config = FileVenuesConfig {
            use_builtin: false,
            catalog: vec![entry("ok", 40.0, -86.0), entry("bad", 120.0, 0.0)],
        };
        let (venues, issues) = config.to_venues();
        assert_eq!(venues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::InvalidVenue {
                id: "bad".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_custom_entry() {
        let config = FileVenuesConfig {
            use_builtin: false,
            catalog: vec![entry("x", 40.0, -86.0), entry("x", 41.0, -86.0)],
        };
        let (venues, issues) = config.to_venues();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].coordinate.lat(), 40.0);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_second_builtin_override_is_duplicate() {
        let config = FileVenuesConfig {
            use_builtin: true,
            catalog: vec![entry("1", 40.0, -86.0), entry("1", 41.0, -87.0)],
        };
        let (venues, issues) = config.to_venues();
        assert_eq!(venues.len(), builtin_campus_venues().len());
        let kept = venues.iter().find(|v| v.id == "1").unwrap();
        assert_eq!(kept.coordinate.lat(), 40.0);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::DuplicateVenue {
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn test_empty_catalog_is_error() {
        let config = FileVenuesConfig {
            use_builtin: false,
            catalog: vec![],
        };
        let (_, issues) = config.to_venues();
        assert!(issues.iter().any(|i| i.is_error()));
    }
}
