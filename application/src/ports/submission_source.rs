//! Submission source port
//!
//! Defines how the application obtains a stable snapshot of a meeting's
//! submissions. Resolution always runs on an owned copy, so participants
//! submitting concurrently cannot change a result half-way.

use async_trait::async_trait;
use rendezvous_domain::{AvailabilityGrid, ParticipantSubmission};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading submissions
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Meeting not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed meeting data: {0}")]
    Malformed(String),
}

/// Point-in-time copy of everything submitted for one meeting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSnapshot {
    #[serde(default)]
    pub meeting_id: String,
    /// Meeting-specific grid; the configured grid applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<AvailabilityGrid>,
    #[serde(default)]
    pub submissions: Vec<ParticipantSubmission>,
}

impl MeetingSnapshot {
    pub fn new(meeting_id: impl Into<String>, submissions: Vec<ParticipantSubmission>) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            grid: None,
            submissions,
        }
    }
}

/// Source of meeting submissions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Take a snapshot of the meeting's current submissions
    async fn snapshot(&self, meeting_id: &str) -> Result<MeetingSnapshot, SourceError>;
}
