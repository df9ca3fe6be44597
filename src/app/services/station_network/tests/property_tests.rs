//! Property tests for the availability invariants of station operations

use super::create_test_station;
use crate::app::models::{RentalOutcome, Station};
use crate::app::services::geo::lat_lon_distance;
use crate::app::services::station_network::StationNetwork;
use proptest::prelude::*;

/// A station with some docks possibly out of service
fn station_strategy(id: i32) -> impl Strategy<Value = Station> {
    (0u32..40)
        .prop_flat_map(|capacity| (Just(capacity), 0..=capacity))
        .prop_flat_map(|(capacity, in_service)| (Just(capacity), Just(in_service), 0..=in_service))
        .prop_flat_map(move |(capacity, in_service, bikes)| {
            (-60.0f64..60.0, -170.0f64..170.0, any::<bool>()).prop_map(move |(lat, lon, smart)| {
                let name = if smart {
                    format!("Station {} - SMART", id)
                } else {
                    format!("Station {}", id)
                };
                create_test_station(id, &name, lat, lon, capacity, bikes, in_service - bikes)
            })
        })
}

fn network_strategy() -> impl Strategy<Value = StationNetwork> {
    (0usize..12).prop_flat_map(|count| {
        (0..count)
            .map(|i| station_strategy(7000 + i as i32))
            .collect::<Vec<_>>()
            .prop_map(StationNetwork::new)
    })
}

fn in_service_slots(network: &StationNetwork) -> Vec<u32> {
    network.stations().iter().map(Station::in_service_slots).collect()
}

fn total_bikes(network: &StationNetwork) -> i64 {
    network
        .stations()
        .iter()
        .map(|s| i64::from(s.bikes_available))
        .sum()
}

fn identities(network: &StationNetwork) -> Vec<(i32, String)> {
    network
        .stations()
        .iter()
        .map(|s| (s.id, s.name.clone()))
        .collect()
}

fn distance_to(station: &Station, lat: f64, lon: f64) -> f64 {
    lat_lon_distance(station.latitude, station.longitude, lat, lon)
}

proptest! {
    #[test]
    fn rent_completes_only_with_bikes_and_docks(station in station_strategy(7090)) {
        let (bikes, docks) = (station.bikes_available, station.docks_available);
        let mut network = StationNetwork::new(vec![station]);

        let outcome = network.rent_bike(7090);
        let after = &network.stations()[0];

        if bikes > 0 && docks > 0 {
            prop_assert_eq!(outcome, RentalOutcome::Completed);
            prop_assert_eq!(after.bikes_available, bikes - 1);
            prop_assert_eq!(after.docks_available, docks + 1);
        } else {
            prop_assert_eq!(outcome, RentalOutcome::Blocked);
            prop_assert_eq!(after.bikes_available, bikes);
            prop_assert_eq!(after.docks_available, docks);
        }
    }

    #[test]
    fn return_completes_only_with_bikes_and_docks(station in station_strategy(7090)) {
        let (bikes, docks) = (station.bikes_available, station.docks_available);
        let mut network = StationNetwork::new(vec![station]);

        let outcome = network.return_bike(7090);
        let after = &network.stations()[0];

        prop_assert_eq!(outcome.is_completed(), bikes > 0 && docks > 0);
        prop_assert_eq!(
            after.bikes_available + after.docks_available,
            bikes + docks
        );
    }

    #[test]
    fn rent_then_return_restores_station(station in station_strategy(7090)) {
        prop_assume!(station.bikes_available >= 2 && station.docks_available > 0);
        let original = station.clone();
        let mut network = StationNetwork::new(vec![station]);

        prop_assert_eq!(network.rent_bike(7090), RentalOutcome::Completed);
        prop_assert_eq!(network.return_bike(7090), RentalOutcome::Completed);
        prop_assert_eq!(&network.stations()[0], &original);
    }

    #[test]
    fn redistribution_keeps_in_service_slots(mut network in network_strategy()) {
        let before = in_service_slots(&network);
        let bikes_before = total_bikes(&network);

        let net_removed = network.redistribute_bikes();

        prop_assert_eq!(in_service_slots(&network), before);
        prop_assert_eq!(net_removed, bikes_before - total_bikes(&network));
        for station in network.stations() {
            prop_assert!(station.bikes_available + station.docks_available <= station.capacity);
        }
    }

    #[test]
    fn redistribution_keeps_order_and_identity(mut network in network_strategy()) {
        let before = identities(&network);

        network.redistribute_bikes();

        prop_assert_eq!(identities(&network), before);
    }

    #[test]
    fn nearest_station_is_never_beaten(
        network in network_strategy(),
        lat in -60.0f64..60.0,
        lon in -170.0f64..170.0,
        require_kiosk in any::<bool>(),
    ) {
        let candidates: Vec<&Station> = network
            .stations()
            .iter()
            .filter(|s| !require_kiosk || network.has_kiosk(s))
            .collect();

        match network.nearest_station(lat, lon, require_kiosk) {
            None => prop_assert!(candidates.is_empty()),
            Some(id) => {
                let best = network.get_station(id).map(|s| distance_to(s, lat, lon));
                prop_assert!(best.is_some());
                let best = best.unwrap_or_default();
                for station in candidates {
                    prop_assert!(best <= distance_to(station, lat, lon));
                }
            }
        }
    }
}
