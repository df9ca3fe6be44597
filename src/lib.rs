//! Bike-share Station Operations Library
//!
//! A Rust library for working with in-memory collections of bike-share
//! station records (kiosks): locating stations, renting and returning bikes,
//! and redistributing the fleet across the network.
//!
//! This library provides tools for:
//! - Coercing raw text cells from station CSV files into numbers
//! - Great-circle (haversine) distances between coordinates
//! - Station lookups, column totals, dock filters and nearest-station search
//! - Rent/return bookkeeping with an explicit tri-state outcome
//! - Proportional redistribution of bikes across stations
//! - Loading station networks from comma-separated files

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod cell_parser;
        pub mod geo;
        pub mod station_network;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Cell, RentalOutcome, Station, StationField, StationId, StationInfo};
pub use app::services::station_network::StationNetwork;
pub use config::StationConfig;

/// Result type alias for station operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading and validating station data
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Station not found
    #[error("Station not found: id = {station_id}")]
    StationNotFound { station_id: StationId },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a station not found error
    pub fn station_not_found(station_id: StationId) -> Self {
        Self::StationNotFound { station_id }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
