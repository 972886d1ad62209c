//! Application-level configuration.
//!
//! This module provides the settings that control how a meeting is resolved:
//! which grid submissions are checked against and which caller-side policies
//! are applied to the resolver rankings.

use rendezvous_domain::{AvailabilityGrid, LocationPolicy, TimePolicy};

/// Resolution settings.
///
/// The resolvers themselves are policy-free; everything here is applied
/// around them by [`ResolveMeetingUseCase`](crate::ResolveMeetingUseCase).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionSettings {
    /// Grid used when a meeting does not carry its own.
    pub grid: AvailabilityGrid,
    /// Reject submissions with slots outside the grid instead of warning.
    pub validate_slots: bool,
    /// Truncate both rankings to this many entries.
    pub top_k: Option<usize>,
    pub time_policy: TimePolicy,
    pub location_policy: LocationPolicy,
}

impl Default for ResolutionSettings {
    fn default() -> Self {
        Self {
            grid: AvailabilityGrid::default(),
            validate_slots: true,
            top_k: None,
            time_policy: TimePolicy::default(),
            location_policy: LocationPolicy::default(),
        }
    }
}

impl ResolutionSettings {
    /// Settings that keep at most `k` entries per ranking.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    pub fn with_time_policy(mut self, policy: TimePolicy) -> Self {
        self.time_policy = policy;
        self
    }

    pub fn with_location_policy(mut self, policy: LocationPolicy) -> Self {
        self.location_policy = policy;
        self
    }

    /// Let out-of-grid slots through to the resolver with a warning.
    pub fn without_slot_validation(mut self) -> Self {
        self.validate_slots = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ResolutionSettings::default();
        assert!(settings.validate_slots);
        assert!(settings.top_k.is_none());
        assert_eq!(settings.time_policy, TimePolicy::Earliest);
        assert_eq!(settings.location_policy, LocationPolicy::BestAverage);
    }

    #[test]
    fn test_builder_chain() {
        let settings = ResolutionSettings::default()
            .with_top_k(3)
            .with_time_policy(TimePolicy::AllTied)
            .without_slot_validation();
        assert_eq!(settings.top_k, Some(3));
        assert_eq!(settings.time_policy, TimePolicy::AllTied);
        assert!(!settings.validate_slots);
    }
}
