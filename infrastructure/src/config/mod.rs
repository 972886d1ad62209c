//! Configuration file loading for rendezvous
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./rendezvous.toml` or `./.rendezvous.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/rendezvous/config.toml`
//! 4. Fallback: `~/.config/rendezvous/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGridConfig, FileOutputConfig, FileResolutionConfig, FileVenue,
    FileVenuesConfig,
};
pub use loader::ConfigLoader;
