//! `[output]` section: how resolutions are printed

use rendezvous_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Printing preferences
///
/// ```toml
/// [output]
/// format = "summary"   # full | summary | json
/// color = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format used when `--output` is not given
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Whether to colorize output, given the `--no-color` flag
    pub fn use_color(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}
