//! Location fairness resolution

use super::venue::Venue;
use crate::core::error::DomainError;
use crate::geo::{Coordinate, haversine_meters};
use crate::ranking::order_by_average_distance;
use crate::submission::ParticipantSubmission;
use serde::{Deserialize, Serialize};

/// Distance statistics for one venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationScore {
    pub venue: Venue,
    /// Mean distance over located participants
    pub average_distance_meters: f64,
    /// Distance of the farthest located participant
    pub max_distance_meters: f64,
    /// `max - average`; low means the travel burden is evenly spread
    pub fairness_gap: f64,
    /// Number of participants the statistics cover
    pub located_participants: usize,
}

impl LocationScore {
    /// Score a venue against a non-empty set of participant coordinates
    ///
    /// Distances are summed in ascending order so the mean does not depend on
    /// the order participants were supplied in.
    pub fn measure(venue: &Venue, participants: &[Coordinate]) -> Self {
        let mut distances: Vec<f64> = participants
            .iter()
            .map(|p| haversine_meters(&venue.coordinate, p))
            .collect();
        distances.sort_by(f64::total_cmp);

        let count = distances.len();
        let (average, max) = if count == 0 {
            (0.0, 0.0)
        } else {
            let sum: f64 = distances.iter().sum();
            let max = distances[count - 1];
            // Rounding in the sum can land a hair above max for equidistant points.
            ((sum / count as f64).min(max), max)
        };

        Self {
            venue: venue.clone(),
            average_distance_meters: average,
            max_distance_meters: max,
            fairness_gap: max - average,
            located_participants: count,
        }
    }
}

/// Ranks venues by average distance to the located participants
///
/// # Example
///
/// ```
/// use rendezvous_domain::{Coordinate, LocationFairnessResolver, ParticipantSubmission, Venue};
///
/// let venues = vec![
///     Venue::new("walc", "WALC", Coordinate::new(40.4279, -86.9166).unwrap()),
///     Venue::new("haas", "Haas Hall", Coordinate::new(40.4254, -86.9189).unwrap()),
/// ];
/// let submissions = vec![
///     ParticipantSubmission::new("a").with_location(40.4283, -86.9162),
///     ParticipantSubmission::new("b").with_location(40.4282, -86.9169),
///     ParticipantSubmission::new("c"),
/// ];
///
/// let ranking = LocationFairnessResolver::resolve(&submissions, &venues).unwrap();
/// assert_eq!(ranking[0].venue.id, "walc");
/// assert_eq!(ranking[0].located_participants, 2);
/// ```
pub struct LocationFairnessResolver;

impl LocationFairnessResolver {
    /// Full ranking of the catalog, lowest average distance first
    ///
    /// Fails with [`DomainError::NoVenuesProvided`] for an empty catalog and
    /// with [`DomainError::InvalidCoordinate`] for any malformed location.
    /// Returns an empty ranking when no participant is located.
    pub fn resolve(
        submissions: &[ParticipantSubmission],
        venues: &[Venue],
    ) -> Result<Vec<LocationScore>, DomainError> {
        if venues.is_empty() {
            return Err(DomainError::NoVenuesProvided);
        }

        let located = Self::located_coordinates(submissions)?;
        if located.is_empty() {
            return Ok(Vec::new());
        }

        let mut scores: Vec<LocationScore> = venues
            .iter()
            .map(|venue| LocationScore::measure(venue, &located))
            .collect();
        order_by_average_distance(&mut scores);
        Ok(scores)
    }

    /// Coordinates of every located participant, in submission order
    ///
    /// Unlocated participants are skipped, never counted as zero distance.
    pub fn located_coordinates(
        submissions: &[ParticipantSubmission],
    ) -> Result<Vec<Coordinate>, DomainError> {
        let mut located = Vec::with_capacity(submissions.len());
        for submission in submissions {
            if let Some(coordinate) = submission.coordinate()? {
                located.push(coordinate);
            }
        }
        Ok(located)
    }
}
