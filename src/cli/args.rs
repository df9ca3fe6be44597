//! Command-line argument definitions for the bike-share station tool
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand loads one station file, runs a single operation in memory and
//! reports the result; the input file is never modified.

use crate::app::models::{StationField, StationId};
use crate::config::StationConfig;
use crate::constants::NO_KIOSK_MARKER;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bike-share station tool
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bikeshare-stations",
    version,
    about = "Query and update bike-share station availability from a station CSV file",
    long_about = "Loads a bike-share station file (id,name,latitude,longitude,capacity,\
                  bikes_available,docks_available) and runs one operation against it: \
                  station lookups, dock filters, nearest-station search, rentals, returns \
                  and fleet redistribution. Results are reported but never written back."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the station CSV file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        global = true,
        help = "Path to the station CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// Name substring marking stations without a kiosk
    #[arg(
        long = "no-kiosk-marker",
        value_name = "TEXT",
        default_value = NO_KIOSK_MARKER,
        global = true,
        help = "Name substring marking stations without a kiosk (case-sensitive)"
    )]
    pub no_kiosk_marker: String,

    /// Treat the first line of the file as data
    #[arg(
        long = "no-header",
        global = true,
        help = "The station file has no header line"
    )]
    pub no_header: bool,

    /// Abort on the first invalid station row
    ///
    /// By default invalid rows are logged and skipped.
    #[arg(
        long = "strict",
        global = true,
        help = "Fail on the first invalid station row instead of skipping it"
    )]
    pub strict: bool,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress logging except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show name, availability and kiosk status of a station
    Info {
        /// Station id
        id: StationId,
    },
    /// Sum an integer column over all stations
    Total {
        /// Column to total: id, capacity, bikes or docks
        field: StationField,
    },
    /// List stations with at least MIN docks available
    Docks {
        /// Minimum number of available docks
        min: u32,
    },
    /// Find the station nearest to a coordinate
    Nearest {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Only consider stations with a kiosk
        #[arg(long)]
        kiosk: bool,
    },
    /// Rent one bike from a station
    Rent {
        /// Station id
        id: StationId,
    },
    /// Return one bike to a station
    Return {
        /// Station id
        id: StationId,
    },
    /// Spread bikes evenly across all stations relative to capacity
    Redistribute,
    /// Show network-wide totals
    Summary,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the subcommand, defaulting to the network summary
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Summary)
    }

    /// Get the log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the station configuration from command-line flags
    pub fn to_config(&self) -> StationConfig {
        let mut config = StationConfig::default().with_no_kiosk_marker(&self.no_kiosk_marker);
        if self.no_header {
            config = config.without_header();
        }
        if self.strict {
            config = config.with_strict_rows();
        }
        config
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        let input = self
            .input_path
            .as_ref()
            .ok_or_else(|| Error::configuration("An input station file is required (--input)"))?;

        if input.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is a directory, expected a station file: {}",
                input.display()
            )));
        }

        if let Some(Commands::Nearest { lat, lon, .. }) = &self.command {
            if !crate::constants::LATITUDE_RANGE.contains(lat) {
                return Err(Error::configuration(format!(
                    "Latitude {} is outside -90..=90",
                    lat
                )));
            }
            if !crate::constants::LONGITUDE_RANGE.contains(lon) {
                return Err(Error::configuration(format!(
                    "Longitude {} is outside -180..=180",
                    lon
                )));
            }
        }

        self.to_config().validate()
    }
}
