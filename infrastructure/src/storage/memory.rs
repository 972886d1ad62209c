//! In-memory submission store

use async_trait::async_trait;
use rendezvous_application::{MeetingSnapshot, SourceError, SubmissionSource};
use rendezvous_domain::{AvailabilityGrid, ParticipantSubmission};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Mutable store of meetings that hands out isolated snapshots
///
/// Writers and snapshot readers may run concurrently; a snapshot is a copy
/// taken under the read lock and never observes later submissions.
#[derive(Debug, Default)]
pub struct InMemorySubmissionStore {
    meetings: RwLock<HashMap<String, MeetingSnapshot>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission, replacing any earlier one from the same participant
    ///
    /// Resubmission is a full replace, never a merge. Returns `true` when an
    /// earlier submission was replaced.
    pub async fn submit(&self, meeting_id: &str, submission: ParticipantSubmission) -> bool {
        let mut meetings = self.meetings.write().await;
        let meeting = meetings
            .entry(meeting_id.to_string())
            .or_insert_with(|| MeetingSnapshot::new(meeting_id, Vec::new()));

        let existing = if submission.participant.is_empty() {
            None
        } else {
            meeting
                .submissions
                .iter_mut()
                .find(|s| s.participant == submission.participant)
        };

        match existing {
            Some(slot) => {
                debug!("Replacing submission from {}", submission.participant);
                *slot = submission;
                true
            }
            None => {
                meeting.submissions.push(submission);
                false
            }
        }
    }

    /// Set a meeting-specific grid
    pub async fn set_grid(&self, meeting_id: &str, grid: AvailabilityGrid) {
        let mut meetings = self.meetings.write().await;
        meetings
            .entry(meeting_id.to_string())
            .or_insert_with(|| MeetingSnapshot::new(meeting_id, Vec::new()))
            .grid = Some(grid);
    }

    /// Delete a meeting together with all its submissions
    pub async fn remove_meeting(&self, meeting_id: &str) -> bool {
        self.meetings.write().await.remove(meeting_id).is_some()
    }

    /// Number of submissions recorded for a meeting
    pub async fn participant_count(&self, meeting_id: &str) -> usize {
        self.meetings
            .read()
            .await
            .get(meeting_id)
            .map_or(0, |m| m.submissions.len())
    }
}

#[async_trait]
impl SubmissionSource for InMemorySubmissionStore {
    async fn snapshot(&self, meeting_id: &str) -> Result<MeetingSnapshot, SourceError> {
        self.meetings
            .read()
            .await
            .get(meeting_id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(meeting_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendezvous_domain::TimeSlotId;
    use std::sync::Arc;

    fn submission(name: &str, day: u32, time: u32) -> ParticipantSubmission {
        ParticipantSubmission::new(name).with_slots([TimeSlotId::new(day, time)])
    }

    #[tokio::test]
    async fn test_resubmission_replaces() {
        let store = InMemorySubmissionStore::new();
        assert!(!store.submit("m", submission("a", 0, 1)).await);
        assert!(store.submit("m", submission("a", 2, 2)).await);

        let snapshot = store.snapshot("m").await.unwrap();
        assert_eq!(snapshot.submissions.len(), 1);
        assert_eq!(
            snapshot.submissions[0].availability.iter().collect::<Vec<_>>(),
            vec![&TimeSlotId::new(2, 2)]
        );
    }

    #[tokio::test]
    async fn test_anonymous_submissions_accumulate() {
        let store = InMemorySubmissionStore::new();
        store.submit("m", submission("", 0, 1)).await;
        store.submit("m", submission("", 0, 1)).await;
        assert_eq!(store.participant_count("m").await, 2);
    }

    #[tokio::test]
    async fn test_snapshot_isolated_from_later_writes() {
        let store = InMemorySubmissionStore::new();
        store.submit("m", submission("a", 0, 1)).await;

        let snapshot = store.snapshot("m").await.unwrap();
        store.submit("m", submission("b", 0, 1)).await;

        assert_eq!(snapshot.submissions.len(), 1);
        assert_eq!(store.participant_count("m").await, 2);
    }

    #[tokio::test]
    async fn test_remove_meeting() {
        let store = InMemorySubmissionStore::new();
        store.submit("m", submission("a", 0, 1)).await;

        assert!(store.remove_meeting("m").await);
        assert!(!store.remove_meeting("m").await);
        assert!(matches!(
            store.snapshot("m").await,
            Err(SourceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_set_grid() {
        let store = InMemorySubmissionStore::new();
        store
            .set_grid(
                "m",
                AvailabilityGrid {
                    days: 2,
                    ..AvailabilityGrid::default()
                },
            )
            .await;
        let snapshot = store.snapshot("m").await.unwrap();
        assert_eq!(snapshot.grid.unwrap().days, 2);
        assert!(snapshot.submissions.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_submitters() {
        let store = Arc::new(InMemorySubmissionStore::new());
        let mut handles = Vec::new();
        for i in 0..16u32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.submit("m", submission(&format!("p{}", i), 0, i % 3)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.participant_count("m").await, 16);
    }
}
