//! Data models for bike-share station processing
//!
//! This module contains the core data structures for representing bike-share
//! stations, raw table cells, station lookups and rental outcomes.

use crate::constants::{LATITUDE_RANGE, LONGITUDE_RANGE, STATION_COLUMN_COUNT, columns};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Station identifier as it appears in station files
pub type StationId = i32;

// =============================================================================
// Station Structure
// =============================================================================

/// A bike-share station (kiosk) with its location and dock occupancy
///
/// `bikes_available + docks_available` is the number of in-service docking
/// slots. Rentals, returns and redistribution move bikes between the two
/// counts without changing that sum.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Station {
    /// Station identifier, unique within a network
    pub id: StationId,

    /// Human-readable station name (e.g., "Danforth Ave / Lamb Ave")
    pub name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Total number of docking slots
    pub capacity: u32,

    /// Bikes currently docked and available to rent
    pub bikes_available: u32,

    /// Empty docks currently available for returns
    pub docks_available: u32,
}

impl Station {
    /// Create a new Station with validation
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        capacity: u32,
        bikes_available: u32,
        docks_available: u32,
    ) -> Result<Self> {
        let station = Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            capacity,
            bikes_available,
            docks_available,
        };

        station.validate()?;
        Ok(station)
    }

    /// Validate station data for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if !LATITUDE_RANGE.contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {} for station {}: must be between -90 and 90 degrees",
                self.latitude, self.id
            )));
        }

        if !LONGITUDE_RANGE.contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {} for station {}: must be between -180 and 180 degrees",
                self.longitude, self.id
            )));
        }

        if self.name.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "Station {} has an empty name",
                self.id
            )));
        }

        // Out-of-service docks are allowed, so the counts may fall short of capacity
        let in_service = u64::from(self.bikes_available) + u64::from(self.docks_available);
        if in_service > u64::from(self.capacity) {
            return Err(Error::data_validation(format!(
                "Station {} reports {} bikes and {} docks, exceeding capacity {}",
                self.id, self.bikes_available, self.docks_available, self.capacity
            )));
        }

        Ok(())
    }

    /// Build a station from a cleaned table row
    ///
    /// The row must hold at least the seven station columns in file order;
    /// trailing columns are ignored.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        if cells.len() < STATION_COLUMN_COUNT {
            return Err(Error::data_validation(format!(
                "Station row has {} columns, expected at least {}",
                cells.len(),
                STATION_COLUMN_COUNT
            )));
        }

        let id = cells[columns::ID]
            .as_int()
            .and_then(|v| StationId::try_from(v).ok())
            .ok_or_else(|| {
                Error::data_validation(format!(
                    "Invalid station id '{}'",
                    cells[columns::ID]
                ))
            })?;

        Station::new(
            id,
            cells[columns::NAME].to_string(),
            coordinate(&cells[columns::LATITUDE], "latitude", id)?,
            coordinate(&cells[columns::LONGITUDE], "longitude", id)?,
            count(&cells[columns::CAPACITY], "capacity", id)?,
            count(&cells[columns::BIKES_AVAILABLE], "bikes_available", id)?,
            count(&cells[columns::DOCKS_AVAILABLE], "docks_available", id)?,
        )
    }

    /// Check whether the station has a physical kiosk
    ///
    /// A station lacks a kiosk when its name contains `no_kiosk_marker`
    /// (case-sensitive substring match).
    pub fn has_kiosk(&self, no_kiosk_marker: &str) -> bool {
        !self.name.contains(no_kiosk_marker)
    }

    /// Number of in-service docking slots (bikes plus empty docks)
    pub fn in_service_slots(&self) -> u32 {
        self.bikes_available + self.docks_available
    }

    /// Get station location as (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

fn coordinate(cell: &Cell, column: &str, id: StationId) -> Result<f64> {
    cell.as_f64().ok_or_else(|| {
        Error::data_validation(format!(
            "Invalid {} '{}' for station {}",
            column, cell, id
        ))
    })
}

fn count(cell: &Cell, column: &str, id: StationId) -> Result<u32> {
    cell.as_int()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            Error::data_validation(format!(
                "Invalid {} '{}' for station {}: must be a non-negative integer",
                column, cell, id
            ))
        })
}

// =============================================================================
// Table Cells
// =============================================================================

/// A cell of a station table, either still raw text or coerced to a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Integer value, if this cell holds a whole number
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value of an `Int` or `Float` cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// Check if the cell still holds text
    pub fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

// =============================================================================
// Station Fields
// =============================================================================

/// Integer-valued station columns that can be totalled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationField {
    Id,
    Capacity,
    BikesAvailable,
    DocksAvailable,
}

impl StationField {
    /// Read this field from a station
    pub fn value(self, station: &Station) -> i64 {
        match self {
            StationField::Id => i64::from(station.id),
            StationField::Capacity => i64::from(station.capacity),
            StationField::BikesAvailable => i64::from(station.bikes_available),
            StationField::DocksAvailable => i64::from(station.docks_available),
        }
    }

    /// Column name as used in station files
    pub fn column_name(self) -> &'static str {
        match self {
            StationField::Id => "id",
            StationField::Capacity => "capacity",
            StationField::BikesAvailable => "bikes_available",
            StationField::DocksAvailable => "docks_available",
        }
    }
}

impl FromStr for StationField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(StationField::Id),
            "capacity" => Ok(StationField::Capacity),
            "bikes" | "bikes_available" => Ok(StationField::BikesAvailable),
            "docks" | "docks_available" => Ok(StationField::DocksAvailable),
            _ => Err(Error::data_validation(format!(
                "Invalid station field '{}': must be id, capacity, bikes or docks",
                s
            ))),
        }
    }
}

impl std::fmt::Display for StationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

// =============================================================================
// Lookup and Rental Results
// =============================================================================

/// Summary of a single station returned by an id lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    pub name: String,
    pub bikes_available: u32,
    pub docks_available: u32,
    pub has_kiosk: bool,
}

/// Outcome of renting or returning a single bike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalOutcome {
    /// Counts were updated
    Completed,
    /// The station had no bike or no dock available; nothing changed
    Blocked,
    /// No station with the requested id
    NotFound,
}

impl RentalOutcome {
    /// Check if the rental or return went through
    pub fn is_completed(self) -> bool {
        self == RentalOutcome::Completed
    }

    /// Get a human-readable description of the outcome
    pub fn description(self) -> &'static str {
        match self {
            RentalOutcome::Completed => "completed",
            RentalOutcome::Blocked => "blocked: no bike or dock available",
            RentalOutcome::NotFound => "station not found",
        }
    }
}

impl std::fmt::Display for RentalOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
