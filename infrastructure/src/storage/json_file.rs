//! JSON file submission source.
//!
//! A meeting is a file `<root>/<meeting_id>.json` holding either a full
//! snapshot object or a bare array of submissions:
//!
//! ```json
//! {
//!   "meetingId": "study-group",
//!   "grid": { "days": 5, "startDate": "2026-10-19" },
//!   "submissions": [
//!     {
//!       "participant": "ana",
//!       "availability": [{ "dayIndex": 0, "timeIndex": 2 }],
//!       "location": { "lat": 40.4283, "lng": -86.9162 }
//!     }
//!   ]
//! }
//! ```

use async_trait::async_trait;
use rendezvous_application::{MeetingSnapshot, SourceError, SubmissionSource};
use rendezvous_domain::ParticipantSubmission;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum MeetingFile {
    Submissions(Vec<ParticipantSubmission>),
    Snapshot(MeetingSnapshot),
}

/// Reads meetings from JSON files on every snapshot
///
/// Each call re-reads the file, so the snapshot reflects the file at that
/// moment and is unaffected by later writes.
#[derive(Debug, Clone)]
pub struct JsonFileSubmissionSource {
    root: PathBuf,
}

impl JsonFileSubmissionSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File backing a meeting
    ///
    /// A meeting id ending in `.json` is taken as a path; anything else must
    /// be a plain name so it cannot escape the root directory.
    pub fn meeting_path(&self, meeting_id: &str) -> Result<PathBuf, SourceError> {
        let direct = Path::new(meeting_id);
        if direct.extension().is_some_and(|ext| ext == "json") {
            return Ok(direct.to_path_buf());
        }

        let valid = !meeting_id.is_empty()
            && meeting_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SourceError::Malformed(format!(
                "invalid meeting id '{}'",
                meeting_id
            )));
        }

        Ok(self.root.join(format!("{}.json", meeting_id)))
    }

    fn default_meeting_id(path: &Path, meeting_id: &str) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| meeting_id.to_string())
    }
}

#[async_trait]
impl SubmissionSource for JsonFileSubmissionSource {
    async fn snapshot(&self, meeting_id: &str) -> Result<MeetingSnapshot, SourceError> {
        let path = self.meeting_path(meeting_id)?;
        debug!("Reading meeting {} from {}", meeting_id, path.display());

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound(meeting_id.to_string()));
            }
            Err(e) => return Err(SourceError::Io(e)),
        };

        let file: MeetingFile = serde_json::from_str(&content)
            .map_err(|e| SourceError::Malformed(format!("{}: {}", path.display(), e)))?;

        let mut snapshot = match file {
            MeetingFile::Snapshot(snapshot) => snapshot,
            MeetingFile::Submissions(submissions) => MeetingSnapshot::new("", submissions),
        };
        if snapshot.meeting_id.is_empty() {
            snapshot.meeting_id = Self::default_meeting_id(&path, meeting_id);
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendezvous_domain::TimeSlotId;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_reads_snapshot_object() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "study.json",
            r#"{
                "meetingId": "study",
                "grid": {"days": 3},
                "submissions": [
                    {"participant": "a", "availability": [{"dayIndex": 0, "timeIndex": 2}]},
                    {"participant": "b", "location": {"lat": 40.4, "lng": -86.9}}
                ]
            }"#,
        );

        let source = JsonFileSubmissionSource::new(dir.path());
        let snapshot = source.snapshot("study").await.unwrap();

        assert_eq!(snapshot.meeting_id, "study");
        assert_eq!(snapshot.grid.unwrap().days, 3);
        assert_eq!(snapshot.submissions.len(), 2);
        assert!(
            snapshot.submissions[0]
                .availability
                .contains(&TimeSlotId::new(0, 2))
        );
    }

    #[tokio::test]
    async fn test_reads_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "lunch.json",
            r#"[{"participant": "a", "availability": [{"dayIndex": 1, "timeIndex": 0}]}]"#,
        );

        let source = JsonFileSubmissionSource::new(dir.path());
        let snapshot = source.snapshot("lunch").await.unwrap();

        assert_eq!(snapshot.meeting_id, "lunch");
        assert!(snapshot.grid.is_none());
        assert_eq!(snapshot.submissions.len(), 1);
    }

    #[tokio::test]
    async fn test_direct_path() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "x.json", "[]");
        let path = dir.path().join("x.json");

        let source = JsonFileSubmissionSource::new("/nonexistent");
        let snapshot = source.snapshot(path.to_str().unwrap()).await.unwrap();
        assert_eq!(snapshot.meeting_id, "x");
        assert!(snapshot.submissions.is_empty());
    }

    #[tokio::test]
    async fn test_missing_meeting() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSubmissionSource::new(dir.path());

        assert!(matches!(
            source.snapshot("ghost").await,
            Err(SourceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bad.json", "{ not json");
        let source = JsonFileSubmissionSource::new(dir.path());

        assert!(matches!(
            source.snapshot("bad").await,
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_path_traversal() {
        let source = JsonFileSubmissionSource::new("/data");
        assert!(source.meeting_path("../etc/passwd").is_err());
        assert!(source.meeting_path("").is_err());
        assert_eq!(
            source.meeting_path("abc-123").unwrap(),
            PathBuf::from("/data/abc-123.json")
        );
    }

    #[tokio::test]
    async fn test_out_of_range_location_is_not_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "m.json",
            r#"[{"participant": "a", "location": {"lat": 91.0, "lng": 0.0}}]"#,
        );
        let source = JsonFileSubmissionSource::new(dir.path());

        let snapshot = source.snapshot("m").await.unwrap();
        assert!(snapshot.submissions[0].coordinate().is_err());
    }
}
