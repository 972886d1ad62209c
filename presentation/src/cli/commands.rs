//! CLI command definitions

use clap::{Parser, ValueEnum};
use rendezvous_domain::{LocationPolicy, TimePolicy};
use std::path::PathBuf;

/// Output format for meeting resolutions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full rankings for times and venues
    Full,
    /// Only the chosen time and the best venue
    Summary,
    /// JSON output
    Json,
}

impl From<rendezvous_domain::OutputFormat> for OutputFormat {
    fn from(format: rendezvous_domain::OutputFormat) -> Self {
        match format {
            rendezvous_domain::OutputFormat::Full => OutputFormat::Full,
            rendezvous_domain::OutputFormat::Summary => OutputFormat::Summary,
            rendezvous_domain::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for rendezvous
#[derive(Parser, Debug)]
#[command(name = "rendezvous")]
#[command(author, version, about = "Find the best time and the fairest place for a group to meet")]
#[command(long_about = r#"
Rendezvous reads every participant's availability grid and starting location
for a meeting, then proposes:

1. Time: the slots the most participants can attend
2. Place: catalog venues ranked by average straight-line distance, with the
   fairness gap (worst-case minus average distance) for each

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./rendezvous.toml      Project-level config
3. ~/.config/rendezvous/config.toml   Global config

Example:
  rendezvous study-group
  rendezvous ./meetings/lunch.json --output full --top-k 3
  rendezvous study-group --location-policy most-equitable --time-policy all-tied
  rendezvous --list-venues hall
"#)]
pub struct Cli {
    /// Meeting id (looked up in --data-dir) or path to a meeting .json file
    pub meeting: Option<String>,

    /// Directory holding <meeting>.json files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Keep at most this many times and venues in the rankings
    #[arg(short = 'k', long, value_name = "K")]
    pub top_k: Option<usize>,

    /// How to choose among the most supported slots (earliest, all-tied)
    #[arg(long, value_name = "POLICY", value_parser = parse_time_policy)]
    pub time_policy: Option<TimePolicy>,

    /// How to order venues (best-average, most-equitable)
    #[arg(long, value_name = "POLICY", value_parser = parse_location_policy)]
    pub location_policy: Option<LocationPolicy>,

    /// Aggregate slots outside the configured grid instead of rejecting them
    #[arg(long)]
    pub allow_out_of_grid: bool,

    /// Output format (defaults to the config file, then summary)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List catalog venues (optionally filtered by name or abbreviation) and exit
    #[arg(long, value_name = "QUERY", num_args = 0..=1, default_missing_value = "")]
    pub list_venues: Option<String>,
}

fn parse_time_policy(s: &str) -> Result<TimePolicy, String> {
    s.parse()
}

fn parse_location_policy(s: &str) -> Result<LocationPolicy, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_meeting_with_options() {
        let cli = Cli::try_parse_from([
            "rendezvous",
            "study",
            "-k",
            "3",
            "--time-policy",
            "all-tied",
            "--location-policy",
            "most-equitable",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.meeting.as_deref(), Some("study"));
        assert_eq!(cli.top_k, Some(3));
        assert_eq!(cli.time_policy, Some(TimePolicy::AllTied));
        assert_eq!(cli.location_policy, Some(LocationPolicy::MostEquitable));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result = Cli::try_parse_from(["rendezvous", "study", "--time-policy", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_venues_without_query() {
        let cli = Cli::try_parse_from(["rendezvous", "--list-venues"]).unwrap();
        assert_eq!(cli.list_venues.as_deref(), Some(""));
        assert!(cli.meeting.is_none());
    }

    #[test]
    fn test_list_venues_with_query() {
        let cli = Cli::try_parse_from(["rendezvous", "--list-venues", "hall"]).unwrap();
        assert_eq!(cli.list_venues.as_deref(), Some("hall"));
    }

    #[test]
    fn test_domain_output_format_conversion() {
        assert_eq!(
            OutputFormat::from(rendezvous_domain::OutputFormat::Summary),
            OutputFormat::Summary
        );
    }
}
