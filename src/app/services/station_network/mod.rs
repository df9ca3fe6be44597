//! Station network service for bike-share station operations
//!
//! A station network is an ordered collection of stations together with the
//! kiosk rule used to classify them. Order matters: lookups return the first
//! matching station and nearest-station ties go to the earliest station.
//! Operations never add, remove or reorder stations.

use crate::app::models::{Station, StationId};
use crate::config::StationConfig;

pub mod loader;
pub mod metadata;
pub mod query;
pub mod redistribution;
pub mod rental;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::{RawRow, read_rows};
pub use metadata::LoadStats;
pub use query::NetworkStatistics;

/// Ordered collection of bike-share stations
#[derive(Debug, Clone, PartialEq)]
pub struct StationNetwork {
    /// Stations in caller-significant order
    pub(crate) stations: Vec<Station>,

    /// Name substring identifying stations without a kiosk
    pub(crate) no_kiosk_marker: String,
}

impl StationNetwork {
    /// Create a network using the default kiosk rule
    pub fn new(stations: Vec<Station>) -> Self {
        Self::with_config(stations, &StationConfig::default())
    }

    /// Create a network using the kiosk rule from `config`
    pub fn with_config(stations: Vec<Station>, config: &StationConfig) -> Self {
        Self {
            stations,
            no_kiosk_marker: config.no_kiosk_marker.clone(),
        }
    }

    /// All stations in order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Consume the network and return its stations
    pub fn into_stations(self) -> Vec<Station> {
        self.stations
    }

    /// Name substring identifying stations without a kiosk
    pub fn no_kiosk_marker(&self) -> &str {
        &self.no_kiosk_marker
    }

    /// Get the first station with the given id
    pub fn get_station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|station| station.id == id)
    }

    pub(crate) fn get_station_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.iter_mut().find(|station| station.id == id)
    }

    /// Check if a station exists in the network
    pub fn contains_station(&self, id: StationId) -> bool {
        self.get_station(id).is_some()
    }

    /// Check whether a station has a kiosk under this network's rule
    pub fn has_kiosk(&self, station: &Station) -> bool {
        station.has_kiosk(&self.no_kiosk_marker)
    }

    /// Get the total number of stations in the network
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the network has no stations
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
