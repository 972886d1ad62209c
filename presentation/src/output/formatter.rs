//! Output formatter trait

use rendezvous_domain::MeetingResolution;

/// Trait for formatting meeting resolutions
pub trait OutputFormatter {
    /// Format the complete resolution with full rankings
    fn format(&self, resolution: &MeetingResolution) -> String;

    /// Format as JSON
    fn format_json(&self, resolution: &MeetingResolution) -> String;

    /// Format the chosen time and venue only (concise output)
    fn format_summary(&self, resolution: &MeetingResolution) -> String;
}
