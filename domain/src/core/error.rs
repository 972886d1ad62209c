//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Empty inputs (no submissions, no located participants) are not errors;
/// the resolvers return an empty ranking for those.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("No venues provided")]
    NoVenuesProvided,

    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

impl DomainError {
    /// Check if this error was caused by caller-supplied participant data
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidCoordinate(_) | DomainError::InvalidTimeSlot(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_venues_error_display() {
        let error = DomainError::NoVenuesProvided;
        assert_eq!(error.to_string(), "No venues provided");
    }

    #[test]
    fn test_invalid_coordinate_display() {
        let error = DomainError::InvalidCoordinate("lat 91 out of range".to_string());
        assert_eq!(error.to_string(), "Invalid coordinate: lat 91 out of range");
    }

    #[test]
    fn test_is_input_error_check() {
        assert!(DomainError::InvalidCoordinate("x".to_string()).is_input_error());
        assert!(DomainError::InvalidTimeSlot("x".to_string()).is_input_error());
        assert!(!DomainError::NoVenuesProvided.is_input_error());
        assert!(!DomainError::InvalidGrid("x".to_string()).is_input_error());
    }
}
