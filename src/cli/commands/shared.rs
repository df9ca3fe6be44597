//! Shared utilities for CLI commands
//!
//! Logging setup, station file loading and output helpers used by every
//! command.

use crate::app::models::Station;
use crate::app::services::station_network::StationNetwork;
use crate::cli::args::{Args, OutputFormat};
use crate::config::StationConfig;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, warn};

/// What a command did, for the final status line
#[derive(Debug, Clone, Default)]
pub struct CommandReport {
    /// One-line description of the result
    pub summary: String,
    /// Number of stations in the loaded network
    pub stations_loaded: usize,
    /// Whether the command changed any station
    pub modified: bool,
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the station network named on the command line
pub fn load_network(args: &Args, config: &StationConfig) -> Result<StationNetwork> {
    let path = args
        .input_path
        .as_ref()
        .ok_or_else(|| Error::configuration("An input station file is required (--input)"))?;

    let (network, stats) = StationNetwork::load_from_csv(path, config)?;

    if stats.has_errors() {
        warn!(
            "{} of {} rows in {} were rejected",
            stats.rows_rejected,
            stats.rows_read,
            path.display()
        );
    }
    if network.is_empty() {
        warn!("No valid stations found in {}", path.display());
    }

    Ok(network)
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::data_validation(format!("Failed to serialize result: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Print a table of stations in human-readable form
pub fn print_station_table(network: &StationNetwork) {
    println!(
        "{:>8}  {:<45} {:>8} {:>6} {:>6}  {}",
        "ID".bold(),
        "Name".bold(),
        "Capacity".bold(),
        "Bikes".bold(),
        "Docks".bold(),
        "Kiosk".bold()
    );
    for station in network.stations() {
        print_station_row(network, station);
    }
}

fn print_station_row(network: &StationNetwork, station: &Station) {
    let kiosk = if network.has_kiosk(station) {
        "yes".green()
    } else {
        "no".yellow()
    };
    println!(
        "{:>8}  {:<45} {:>8} {:>6} {:>6}  {}",
        station.id,
        station.name,
        station.capacity,
        station.bikes_available,
        station.docks_available,
        kiosk
    );
}

/// Pick between human and JSON output
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, human: impl FnOnce()) -> Result<()> {
    match format {
        OutputFormat::Human => {
            human();
            Ok(())
        }
        OutputFormat::Json => print_json(value),
    }
}
