//! Fleet redistribution across a station network
//!
//! Redistribution gives every station the same share of bikes relative to
//! its capacity. The network-wide ratio is total bikes available over total
//! capacity; each station receives `capacity * ratio` bikes rounded half to
//! even, and the rest of its in-service slots become empty docks.

use super::StationNetwork;
use crate::app::models::StationField;
use tracing::{debug, info};

impl StationNetwork {
    /// Redistribute bikes in place
    ///
    /// A station's in-service slot count (bikes plus docks) never changes, so
    /// a station with out-of-service docks receives at most that many bikes.
    ///
    /// # Returns
    /// Net bikes removed: the sum over all stations of old bikes minus new
    /// bikes. Negative when more bikes were placed than taken away.
    pub fn redistribute_bikes(&mut self) -> i64 {
        let total_bikes = self.column_total(StationField::BikesAvailable);
        let total_capacity = self.column_total(StationField::Capacity);

        if total_capacity == 0 {
            debug!("Skipping redistribution: network has no capacity");
            return 0;
        }

        let ratio = total_bikes as f64 / total_capacity as f64;
        let mut net_removed = 0i64;

        for station in &mut self.stations {
            let in_service = station.in_service_slots();
            let target = (f64::from(station.capacity) * ratio).round_ties_even() as u32;
            let target = target.min(in_service);

            net_removed += i64::from(station.bikes_available) - i64::from(target);
            debug!(
                "Station {}: {} -> {} bikes",
                station.id, station.bikes_available, target
            );

            station.bikes_available = target;
            station.docks_available = in_service - target;
        }

        info!(
            "Redistributed {} bikes over {} stations at ratio {:.4} (net removed: {})",
            total_bikes,
            self.stations.len(),
            ratio,
            net_removed
        );
        net_removed
    }
}
