//! Configuration issues
//!
//! Loaders collect every problem they find instead of stopping at the first,
//! so a user fixing a config file sees the whole list at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not name a known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A field could not be parsed or is out of range.
    InvalidValue { field: String, value: String },
    /// A catalog venue has an unusable coordinate.
    InvalidVenue { id: String },
    /// The same venue id appears more than once.
    DuplicateVenue { id: String },
    /// No venue would be available for location resolution.
    EmptyVenueCatalog,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let warning = ConfigIssue::warning(ConfigIssueCode::EmptyVenueCatalog, "no venues");
        let error = ConfigIssue::error(ConfigIssueCode::EmptyVenueCatalog, "no venues");
        assert!(!warning.is_error());
        assert!(error.is_error());
        assert_eq!(error.to_string(), "no venues");
    }
}
