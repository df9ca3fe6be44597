//! Renting and returning single bikes

use super::StationNetwork;
use crate::app::models::{RentalOutcome, Station, StationId};
use tracing::{debug, warn};

impl StationNetwork {
    /// Rent one bike from the first station with the given id
    ///
    /// The rental goes through only when the station has both a bike and a
    /// dock available; it then has one bike fewer and one dock more.
    /// Otherwise the station is left unchanged.
    pub fn rent_bike(&mut self, id: StationId) -> RentalOutcome {
        self.apply_rental(id, "rent", |station| {
            station.bikes_available -= 1;
            station.docks_available += 1;
        })
    }

    /// Return one bike to the first station with the given id
    ///
    /// Uses the same availability guard as [`StationNetwork::rent_bike`]; on
    /// success the station has one bike more and one dock fewer.
    pub fn return_bike(&mut self, id: StationId) -> RentalOutcome {
        self.apply_rental(id, "return", |station| {
            station.bikes_available += 1;
            station.docks_available -= 1;
        })
    }

    fn apply_rental(
        &mut self,
        id: StationId,
        action: &str,
        update: impl FnOnce(&mut Station),
    ) -> RentalOutcome {
        let Some(station) = self.get_station_mut(id) else {
            warn!("Cannot {} bike: station {} not found", action, id);
            return RentalOutcome::NotFound;
        };

        if station.bikes_available == 0 || station.docks_available == 0 {
            debug!(
                "Bike {} blocked at station {} ({} bikes, {} docks)",
                action, id, station.bikes_available, station.docks_available
            );
            return RentalOutcome::Blocked;
        }

        update(station);
        debug!(
            "Bike {} completed at station {}: now {} bikes, {} docks",
            action, id, station.bikes_available, station.docks_available
        );
        RentalOutcome::Completed
    }
}
