//! Resolve Meeting use case
//!
//! Plays the meeting service's side of the resolution engine: take a stable
//! snapshot, check slots against the grid, run both resolvers and apply the
//! caller-side policies (tie handling, equity preference, top-K).

use crate::config::ResolutionSettings;
use crate::ports::submission_source::{SourceError, SubmissionSource};
use crate::ports::venue_catalog::VenueCatalog;
use rendezvous_domain::{
    AvailabilityGrid, Coordinate, DomainError, LocationFairnessResolver, MeetingResolution,
    ParticipantSubmission, TimeConsensusResolver, TimeSlotId, Venue, geographic_center,
    haversine_meters, top_k,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while resolving a meeting
#[derive(Error, Debug)]
pub enum ResolveMeetingError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Slot {slot} submitted by '{participant}' is outside the {days}x{slots_per_day} grid")]
    SlotOutOfGrid {
        participant: String,
        slot: TimeSlotId,
        days: u32,
        slots_per_day: u32,
    },

    #[error("Resolution task failed: {0}")]
    TaskFailed(String),
}

/// Input for the ResolveMeeting use case
#[derive(Debug, Clone)]
pub struct ResolveMeetingInput {
    pub meeting_id: String,
    pub settings: ResolutionSettings,
}

impl ResolveMeetingInput {
    pub fn new(meeting_id: impl Into<String>) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            settings: ResolutionSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ResolutionSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Use case for resolving a meeting's time and place
pub struct ResolveMeetingUseCase<S: SubmissionSource + 'static, C: VenueCatalog + 'static> {
    source: Arc<S>,
    catalog: Arc<C>,
}

impl<S: SubmissionSource + 'static, C: VenueCatalog + 'static> ResolveMeetingUseCase<S, C> {
    pub fn new(source: Arc<S>, catalog: Arc<C>) -> Self {
        Self { source, catalog }
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        input: ResolveMeetingInput,
    ) -> Result<MeetingResolution, ResolveMeetingError> {
        let settings = &input.settings;
        let snapshot = self.source.snapshot(&input.meeting_id).await?;

        info!(
            "Resolving meeting {} with {} submissions",
            input.meeting_id,
            snapshot.submissions.len()
        );

        let grid = snapshot.grid.clone().unwrap_or_else(|| settings.grid.clone());
        grid.validate()?;
        Self::check_slots(&grid, &snapshot.submissions, settings.validate_slots)?;

        let silent = snapshot
            .submissions
            .iter()
            .filter(|s| !s.has_availability())
            .count();
        if silent > 0 {
            debug!("{} participants marked no slot", silent);
        }

        let venues = self.catalog.venues();
        debug!(
            "Scoring {} venues, times by {}, venues by {}",
            venues.len(),
            settings.time_policy.description(),
            settings.location_policy.description()
        );

        let participant_count = snapshot.submissions.len();
        let submissions: Arc<[ParticipantSubmission]> = snapshot.submissions.into();
        let venues: Arc<[Venue]> = venues.into();

        // The resolvers only read the shared snapshot, so both run at once.
        let time_task = {
            let submissions = Arc::clone(&submissions);
            tokio::task::spawn_blocking(move || TimeConsensusResolver::resolve(&submissions))
        };
        let location_task = {
            let submissions = Arc::clone(&submissions);
            let venues = Arc::clone(&venues);
            tokio::task::spawn_blocking(move || {
                LocationFairnessResolver::resolve(&submissions, &venues)
            })
        };

        let (times, locations) = futures::future::join(time_task, location_task).await;
        let times = times.map_err(|e| ResolveMeetingError::TaskFailed(e.to_string()))?;
        let locations = locations.map_err(|e| ResolveMeetingError::TaskFailed(e.to_string()))??;

        let located = LocationFairnessResolver::located_coordinates(&submissions)?;
        let center = geographic_center(&located);
        let nearest_to_center = center.and_then(|c| Self::nearest_venue(&c, &venues));

        let chosen_times = settings.time_policy.select(&times).to_vec();
        let arranged = settings.location_policy.arrange(&locations);

        match chosen_times.first() {
            Some(best) => info!(
                "Best slot {} ({}) supported by {}/{}",
                best.slot,
                grid.label(&best.slot),
                best.support_count,
                participant_count
            ),
            None => info!("No participant marked any slot"),
        }
        match arranged.first() {
            Some(best) => info!(
                "Best venue {} at {:.0} m average",
                best.venue, best.average_distance_meters
            ),
            None => info!("No located participants, no venue proposed"),
        }

        Ok(MeetingResolution {
            meeting_id: input.meeting_id,
            grid,
            participant_count,
            located_count: located.len(),
            times: top_k(&times, settings.top_k).to_vec(),
            chosen_times,
            locations: top_k(&arranged, settings.top_k).to_vec(),
            center,
            nearest_to_center,
        })
    }

    /// Check every submitted slot against the grid
    ///
    /// Out-of-grid slots fail the resolution when `strict`, otherwise they are
    /// logged and aggregated like any other slot.
    fn check_slots(
        grid: &AvailabilityGrid,
        submissions: &[ParticipantSubmission],
        strict: bool,
    ) -> Result<(), ResolveMeetingError> {
        for submission in submissions {
            for slot in submission.availability.iter().filter(|s| !grid.contains(s)) {
                if strict {
                    return Err(ResolveMeetingError::SlotOutOfGrid {
                        participant: submission.participant.clone(),
                        slot: *slot,
                        days: grid.days,
                        slots_per_day: grid.slots_per_day,
                    });
                }
                warn!(
                    "Slot {} from '{}' is outside the grid",
                    slot, submission.participant
                );
            }
        }
        Ok(())
    }

    fn nearest_venue(center: &Coordinate, venues: &[Venue]) -> Option<Venue> {
        venues
            .iter()
            .min_by(|a, b| {
                haversine_meters(center, &a.coordinate)
                    .total_cmp(&haversine_meters(center, &b.coordinate))
                    .then_with(|| a.id.cmp(&b.id))
            })
            .cloned()
    }
}
