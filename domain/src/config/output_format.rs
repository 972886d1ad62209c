//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for meeting resolutions
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full rankings for times and venues
    Full,
    /// Only the chosen time and the best venue (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
