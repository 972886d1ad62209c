//! Participant submission value object

use crate::core::error::DomainError;
use crate::geo::{Coordinate, LocationInput};
use crate::schedule::TimeSlotId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One participant's answer: available slots plus an optional starting point
///
/// Availability is a set, so duplicate slots collapse on construction and on
/// deserialization. A resubmission replaces the whole value.
///
/// # Example
///
/// ```
/// use rendezvous_domain::{ParticipantSubmission, TimeSlotId};
///
/// let submission = ParticipantSubmission::new("ana")
///     .with_slots([TimeSlotId::new(0, 2), TimeSlotId::new(0, 2), TimeSlotId::new(0, 3)])
///     .with_location(40.4283, -86.9162);
///
/// assert_eq!(submission.availability.len(), 2);
/// assert!(submission.coordinate().unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSubmission {
    /// Participant display name
    #[serde(default)]
    pub participant: String,
    /// Slots this participant can attend
    #[serde(default)]
    pub availability: BTreeSet<TimeSlotId>,
    /// Starting location as submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationInput>,
}

impl ParticipantSubmission {
    /// Create an empty submission for a participant
    pub fn new(participant: impl Into<String>) -> Self {
        Self {
            participant: participant.into(),
            availability: BTreeSet::new(),
            location: None,
        }
    }

    /// Add available slots
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = TimeSlotId>) -> Self {
        self.availability.extend(slots);
        self
    }

    /// Set a fully specified starting location
    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some(LocationInput::new(lat, lng));
        self
    }

    /// Validated coordinate, `Ok(None)` when the participant gave no location
    pub fn coordinate(&self) -> Result<Option<Coordinate>, DomainError> {
        match &self.location {
            Some(input) => input.validate().map_err(|e| match e {
                DomainError::InvalidCoordinate(reason) if !self.participant.is_empty() => {
                    DomainError::InvalidCoordinate(format!("{} ({})", reason, self.participant))
                }
                other => other,
            }),
            None => Ok(None),
        }
    }

    /// Whether the participant marked any slot
    pub fn has_availability(&self) -> bool {
        !self.availability.is_empty()
    }
}
