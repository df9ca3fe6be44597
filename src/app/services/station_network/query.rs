//! Station lookup and search functionality
//!
//! This module provides the read-only queries over a station network: id
//! lookups, column totals, dock filters and nearest-station search.

use super::StationNetwork;
use crate::app::models::{StationField, StationId, StationInfo};
use crate::app::services::geo::lat_lon_distance;
use serde::Serialize;
use tracing::debug;

impl StationNetwork {
    /// Get name, availability and kiosk status for a station
    ///
    /// Returns the details of the first station whose id equals `id`, or
    /// `None` when no station has that id.
    ///
    /// # Examples
    /// ```
    /// # use bikeshare_stations::{Station, StationNetwork};
    /// let station = Station::new(7090, "Danforth Ave", 43.681991, -79.329455, 15, 4, 10);
    /// let network = StationNetwork::new(vec![station.unwrap()]);
    ///
    /// let info = network.station_info(7090).unwrap();
    /// assert_eq!(info.bikes_available, 4);
    /// assert!(info.has_kiosk);
    /// assert!(network.station_info(1).is_none());
    /// ```
    pub fn station_info(&self, id: StationId) -> Option<StationInfo> {
        self.get_station(id).map(|station| StationInfo {
            name: station.name.clone(),
            bikes_available: station.bikes_available,
            docks_available: station.docks_available,
            has_kiosk: self.has_kiosk(station),
        })
    }

    /// Sum of an integer column over all stations
    pub fn column_total(&self, field: StationField) -> i64 {
        self.stations.iter().map(|station| field.value(station)).sum()
    }

    /// Ids of stations with at least `min_docks` docks available, in order
    pub fn stations_with_min_docks(&self, min_docks: u32) -> Vec<StationId> {
        self.stations
            .iter()
            .filter(|station| station.docks_available >= min_docks)
            .map(|station| station.id)
            .collect()
    }

    /// Find the station closest to a point
    ///
    /// Distances are haversine kilometres rounded to the nearest metre. When
    /// `require_kiosk` is set, stations without a kiosk are not considered.
    /// Ties go to the station that appears first.
    ///
    /// # Returns
    /// The id of the nearest candidate, or `None` when there is no candidate
    /// (empty network, or no kiosk station when one is required) or the
    /// coordinate is not finite.
    pub fn nearest_station(&self, lat: f64, lon: f64, require_kiosk: bool) -> Option<StationId> {
        if !lat.is_finite() || !lon.is_finite() {
            debug!("No nearest station for non-finite coordinate ({}, {})", lat, lon);
            return None;
        }

        let nearest = self
            .stations
            .iter()
            .filter(|station| !require_kiosk || self.has_kiosk(station))
            .map(|station| {
                (
                    station.id,
                    lat_lon_distance(station.latitude, station.longitude, lat, lon),
                )
            })
            .filter(|(_, distance)| distance.is_finite())
            .fold(None, |best: Option<(StationId, f64)>, (id, distance)| match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((id, distance)),
            });

        match nearest {
            Some((id, distance)) => {
                debug!(
                    "Nearest station to ({}, {}) is {} at {:.3} km (kiosk required: {})",
                    lat, lon, id, distance, require_kiosk
                );
                Some(id)
            }
            None => {
                debug!(
                    "No candidate station near ({}, {}) (kiosk required: {})",
                    lat, lon, require_kiosk
                );
                None
            }
        }
    }

    /// Get basic statistics about the station network
    pub fn statistics(&self) -> NetworkStatistics {
        let total_capacity = self.column_total(StationField::Capacity);
        let total_bikes = self.column_total(StationField::BikesAvailable);

        NetworkStatistics {
            station_count: self.stations.len(),
            kiosk_count: self
                .stations
                .iter()
                .filter(|station| self.has_kiosk(station))
                .count(),
            total_capacity,
            total_bikes,
            total_docks: self.column_total(StationField::DocksAvailable),
            bike_ratio: if total_capacity == 0 {
                0.0
            } else {
                total_bikes as f64 / total_capacity as f64
            },
        }
    }
}

/// Basic statistics about a station network
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkStatistics {
    pub station_count: usize,
    pub kiosk_count: usize,
    pub total_capacity: i64,
    pub total_bikes: i64,
    pub total_docks: i64,
    /// Bikes available per unit of capacity across the whole network
    pub bike_ratio: f64,
}
