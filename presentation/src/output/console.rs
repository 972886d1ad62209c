//! Console output formatter for meeting resolutions

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use rendezvous_domain::{MeetingResolution, TimeResolution, Venue};

/// Formats meeting resolutions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete resolution with full rankings
    pub fn format(resolution: &MeetingResolution) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Meeting Resolution"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Meeting:".cyan().bold(),
            resolution.meeting_id
        ));
        output.push_str(&format!(
            "{} {} ({} located)\n",
            "Participants:".cyan().bold(),
            resolution.participant_count,
            resolution.located_count
        ));

        // Time ranking
        output.push_str(&Self::section_header("Time Consensus"));
        if resolution.times.is_empty() {
            output.push_str(&format!("  {}\n", "No participant marked any slot".dimmed()));
        }
        for (rank, time) in resolution.times.iter().enumerate() {
            let chosen = resolution.chosen_times.contains(time);
            let line = format!(
                "{:>3}. {:<24} {:>7}  {}",
                rank + 1,
                resolution.grid.label(&time.slot),
                format!("[{}]", time.slot),
                Self::support_summary(time, resolution.participant_count)
            );
            if chosen {
                output.push_str(&format!("{} {}\n", line.green().bold(), "*".green()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        // Venue ranking
        output.push_str(&Self::section_header("Venue Ranking"));
        if resolution.locations.is_empty() {
            output.push_str(&format!("  {}\n", "No located participants".dimmed()));
        }
        for (rank, score) in resolution.locations.iter().enumerate() {
            let line = format!(
                "{:>3}. {:<42} avg {:>8}  max {:>8}  gap {:>8}",
                rank + 1,
                score.venue.to_string(),
                Self::distance(score.average_distance_meters),
                Self::distance(score.max_distance_meters),
                Self::distance(score.fairness_gap)
            );
            if rank == 0 {
                output.push_str(&format!("{}\n", line.green().bold()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        if let Some(center) = &resolution.center {
            output.push_str(&format!(
                "\n{} {}",
                "Group center:".cyan().bold(),
                center
            ));
            if let Some(nearest) = &resolution.nearest_to_center {
                output.push_str(&format!(" (nearest venue: {})", nearest.short_name()));
            }
            output.push('\n');
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(resolution: &MeetingResolution) -> String {
        serde_json::to_string_pretty(resolution).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the chosen time and venue only (concise output)
    pub fn format_summary(resolution: &MeetingResolution) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("=== Meeting {} ===", resolution.meeting_id).cyan().bold()
        ));

        match resolution.best_time() {
            Some(best) => {
                let support = if best.is_unanimous(resolution.participant_count) {
                    "everyone available".to_string()
                } else {
                    format!(
                        "{}/{} available",
                        best.support_count, resolution.participant_count
                    )
                };
                output.push_str(&format!(
                    "{} {} ({})\n",
                    "When: ".bold(),
                    resolution.grid.label(&best.slot).green().bold(),
                    support
                ));
                for other in resolution.chosen_times.iter().skip(1) {
                    output.push_str(&format!("       {} (tied)\n", resolution.grid.label(&other.slot)));
                }
            }
            None => output.push_str(&format!(
                "{} {}\n",
                "When: ".bold(),
                "no common time yet".dimmed()
            )),
        }

        match resolution.best_location() {
            Some(best) => output.push_str(&format!(
                "{} {} (avg {}, farthest {})\n",
                "Where:".bold(),
                best.venue.to_string().green().bold(),
                Self::distance(best.average_distance_meters),
                Self::distance(best.max_distance_meters)
            )),
            None => output.push_str(&format!(
                "{} {}\n",
                "Where:".bold(),
                "no located participants yet".dimmed()
            )),
        }

        if resolution.is_undecided() {
            output.push_str(&format!(
                "\n{}\n",
                "Waiting for participants to submit availability or a location.".dimmed()
            ));
        }

        output
    }

    /// Format a venue catalog listing
    pub fn format_venues(venues: &[Venue]) -> String {
        if venues.is_empty() {
            return format!("{}\n", "No matching venues".dimmed());
        }

        let mut output = String::new();
        for venue in venues {
            output.push_str(&format!(
                "{:>4}  {:<7} {:<40} {}\n",
                venue.id,
                venue.abbreviation.as_deref().unwrap_or("-").yellow(),
                venue.display_name,
                venue.coordinate.to_string().dimmed()
            ));
        }
        output
    }

    /// Meters below 1 km, kilometers above
    pub fn distance(meters: f64) -> String {
        if meters < 1000.0 {
            format!("{:.0} m", meters)
        } else {
            format!("{:.2} km", meters / 1000.0)
        }
    }

    /// Visual support summary, e.g. `"2/3 [●●○] 67%"`
    pub fn support_summary(time: &TimeResolution, participants: usize) -> String {
        let filled = time.support_count.min(participants);
        format!(
            "{}/{} [{}{}] {:.0}%",
            time.support_count,
            participants,
            "●".repeat(filled),
            "○".repeat(participants - filled),
            time.support_ratio(participants) * 100.0
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, resolution: &MeetingResolution) -> String {
        Self::format(resolution)
    }

    fn format_json(&self, resolution: &MeetingResolution) -> String {
        Self::format_json(resolution)
    }

    fn format_summary(&self, resolution: &MeetingResolution) -> String {
        Self::format_summary(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rendezvous_domain::{AvailabilityGrid, Coordinate, LocationScore, TimeSlotId};

    fn resolution() -> MeetingResolution {
        let venue = Venue::new(
            "3",
            "Wilmeth Active Learning Center",
            Coordinate::new(40.4279, -86.9166).unwrap(),
        )
        .with_abbreviation("WALC");
        let best = TimeResolution::new(TimeSlotId::new(0, 2), 2);

        MeetingResolution {
            meeting_id: "study".to_string(),
            grid: AvailabilityGrid::default(),
            participant_count: 3,
            located_count: 2,
            times: vec![best, TimeResolution::new(TimeSlotId::new(1, 0), 1)],
            chosen_times: vec![best],
            locations: vec![LocationScore {
                venue: venue.clone(),
                average_distance_meters: 49.2,
                max_distance_meters: 1520.0,
                fairness_gap: 1470.8,
                located_participants: 2,
            }],
            center: Coordinate::new(40.42825, -86.91655).ok(),
            nearest_to_center: Some(venue),
        }
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_distance_units() {
        assert_eq!(ConsoleFormatter::distance(49.2), "49 m");
        assert_eq!(ConsoleFormatter::distance(1520.0), "1.52 km");
    }

    #[test]
    fn test_support_summary() {
        let time = TimeResolution::new(TimeSlotId::new(0, 0), 2);
        assert_eq!(ConsoleFormatter::support_summary(&time, 3), "2/3 [●●○] 67%");
    }

    #[test]
    fn test_summary_mentions_time_and_place() {
        plain();
        let output = ConsoleFormatter::format_summary(&resolution());
        assert!(output.contains("Day 1 10:00 AM"));
        assert!(output.contains("2/3 available"));
        assert!(output.contains("Wilmeth Active Learning Center (WALC)"));
        assert!(output.contains("1.52 km"));
        assert!(!output.contains("Waiting for participants"));
    }

    #[test]
    fn test_summary_flags_unanimous_slot() {
        plain();
        let mut resolution = resolution();
        resolution.participant_count = 2;
        let output = ConsoleFormatter::format_summary(&resolution);
        assert!(output.contains("everyone available"));
        assert!(!output.contains("2/2"));
    }

    #[test]
    fn test_summary_when_undecided() {
        plain();
        let output = ConsoleFormatter::format_summary(&MeetingResolution::default());
        assert!(output.contains("no common time yet"));
        assert!(output.contains("no located participants yet"));
        assert!(output.contains("Waiting for participants"));
    }

    #[test]
    fn test_summary_uses_calendar_dates() {
        plain();
        let mut resolution = resolution();
        resolution.grid = AvailabilityGrid::default()
            .starting_on(chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let output = ConsoleFormatter::format_summary(&resolution);
        assert!(output.contains("Mon, Oct 19 10:00 AM"));
    }

    #[test]
    fn test_full_lists_rankings() {
        plain();
        let output = ConsoleFormatter::format(&resolution());
        assert!(output.contains("Time Consensus"));
        assert!(output.contains("[0-2]"));
        assert!(output.contains("[1-0]"));
        assert!(output.contains("2/3 [●●○] 67%"));
        assert!(output.contains("Venue Ranking"));
        assert!(output.contains("Group center:"));
        assert!(output.contains("(nearest venue: WALC)"));
    }

    #[test]
    fn test_json_round_trips_fields() {
        let json = ConsoleFormatter::format_json(&resolution());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["meetingId"], "study");
        assert_eq!(value["chosenTimes"][0]["supportCount"], 2);
        assert_eq!(value["locations"][0]["venue"]["abbreviation"], "WALC");
    }

    #[test]
    fn test_venue_listing() {
        plain();
        let venues = vec![
            Venue::new("7", "Haas Hall", Coordinate::new(40.4254, -86.9189).unwrap())
                .with_abbreviation("HAAS"),
        ];
        let output = ConsoleFormatter::format_venues(&venues);
        assert!(output.contains("HAAS"));
        assert!(output.contains("Haas Hall"));
        assert!(ConsoleFormatter::format_venues(&[]).contains("No matching venues"));
    }
}
