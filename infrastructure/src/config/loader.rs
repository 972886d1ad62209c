//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

const PROJECT_FILENAMES: [&str; 2] = ["rendezvous.toml", ".rendezvous.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./rendezvous.toml` or `./.rendezvous.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/rendezvous/config.toml`
    /// 4. Fallback: `~/.config/rendezvous/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!("Loading project config {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!("Loading config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/rendezvous/config.toml if set,
    /// otherwise falls back to ~/.config/rendezvous/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rendezvous").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./rendezvous.toml or ./.rendezvous.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.venues.use_builtin);
        assert!(config.grid.validate_slots);
    }

    #[test]
    fn test_explicit_file_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[resolution]
top_k = 2

[grid]
days = 3
"#
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.resolution.top_k, Some(2));
        assert_eq!(config.grid.days, 3);
        // untouched keys keep their defaults
        assert_eq!(config.grid.slots_per_day, 25);
        assert!(config.venues.use_builtin);
    }

    #[test]
    fn test_explicit_file_rejects_wrong_types() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\ndays = \"seven\"").unwrap();

        assert!(ConfigLoader::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("rendezvous"));
    }
}
