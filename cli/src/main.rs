//! CLI entrypoint for rendezvous
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use rendezvous_application::{
    ResolutionSettings, ResolveMeetingError, ResolveMeetingInput, ResolveMeetingUseCase,
    VenueCatalog,
};
use rendezvous_infrastructure::{
    ConfigLoader, FileConfig, JsonFileSubmissionSource, StaticVenueCatalog,
};
use rendezvous_presentation::{Cli, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !config.output.use_color(cli.no_color) {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let catalog = Arc::new(StaticVenueCatalog::new(config.to_venues()));
    info!("Venue catalog holds {} venues", catalog.len());

    if let Some(query) = &cli.list_venues {
        print!("{}", ConsoleFormatter::format_venues(&catalog.search(query)));
        return Ok(());
    }

    let meeting = match &cli.meeting {
        Some(m) => m.clone(),
        None => bail!("Meeting id is required. Use --list-venues to browse the catalog."),
    };

    let settings = apply_overrides(config.to_settings(), &cli);
    let source = Arc::new(JsonFileSubmissionSource::new(&cli.data_dir));
    let use_case = ResolveMeetingUseCase::new(source, catalog);

    let input = ResolveMeetingInput::new(meeting.clone()).with_settings(settings);
    let resolution = match use_case.execute(input).await {
        Ok(resolution) => resolution,
        Err(ResolveMeetingError::Domain(e)) if e.is_input_error() => {
            bail!("Meeting '{}' has invalid participant data: {}", meeting, e)
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to resolve meeting '{}'", meeting)));
        }
    };

    if resolution.is_undecided() {
        warn!("Meeting '{}' has no availability or locations yet", meeting);
    }

    // Output results
    let format = cli
        .output
        .or_else(|| config.output.format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Summary);

    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&resolution),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&resolution),
        OutputFormat::Json => ConsoleFormatter::format_json(&resolution),
    };

    println!("{}", output);

    Ok(())
}

/// Load and validate configuration files
///
/// Warnings are logged; errors abort before any meeting is read.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue);
    }
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    Ok(config)
}

/// Command-line flags take precedence over configuration files
fn apply_overrides(mut settings: ResolutionSettings, cli: &Cli) -> ResolutionSettings {
    // 0 keeps the full rankings
    if let Some(k) = cli.top_k.filter(|&k| k > 0) {
        settings = settings.with_top_k(k);
    }
    if let Some(policy) = cli.time_policy {
        settings = settings.with_time_policy(policy);
    }
    if let Some(policy) = cli.location_policy {
        settings = settings.with_location_policy(policy);
    }
    if cli.allow_out_of_grid {
        settings = settings.without_slot_validation();
    }
    settings
}
