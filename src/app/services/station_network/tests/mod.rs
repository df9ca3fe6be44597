//! Shared test utilities and fixtures for station network tests

use crate::app::models::{Station, StationId};
use crate::app::services::station_network::StationNetwork;
use std::fs;
use std::path::Path;

pub mod property_tests;
pub mod redistribution_tests;

/// Create a test station without validation
pub fn create_test_station(
    id: StationId,
    name: &str,
    lat: f64,
    lon: f64,
    capacity: u32,
    bikes: u32,
    docks: u32,
) -> Station {
    Station {
        id,
        name: name.to_string(),
        latitude: lat,
        longitude: lon,
        capacity,
        bikes_available: bikes,
        docks_available: docks,
    }
}

/// Three east-end Toronto stations; the last one has no kiosk
pub fn sample_stations() -> Vec<Station> {
    vec![
        create_test_station(7090, "Danforth Ave / Lamb Ave", 43.681991, -79.329455, 15, 4, 10),
        create_test_station(
            7486,
            "Gerrard St E / Ted Reeve Dr",
            43.684261,
            -79.299332,
            24,
            5,
            19,
        ),
        create_test_station(
            7571,
            "Highfield Rd / Gerrard St E - SMART",
            43.671685,
            -79.325176,
            19,
            14,
            5,
        ),
    ]
}

/// Two downtown stations; the second one has no kiosk
pub fn handout_stations() -> Vec<Station> {
    vec![
        create_test_station(7000, "Ft. York / Capreol Crt.", 43.639832, -79.395954, 31, 20, 11),
        create_test_station(
            7001,
            "Lower Jarvis St SMART / The Esplanade",
            43.647992,
            -79.370907,
            15,
            5,
            10,
        ),
    ]
}

pub fn sample_network() -> StationNetwork {
    StationNetwork::new(sample_stations())
}

pub fn handout_network() -> StationNetwork {
    StationNetwork::new(handout_stations())
}

/// (bikes, docks) for every station, in order
pub fn availability(network: &StationNetwork) -> Vec<(u32, u32)> {
    network
        .stations()
        .iter()
        .map(|station| (station.bikes_available, station.docks_available))
        .collect()
}

/// Station file content matching `sample_stations()`
pub const SAMPLE_CSV: &str = "\
id,name,latitude,longitude,capacity,bikes_available,docks_available
7090,Danforth Ave / Lamb Ave,43.681991,-79.329455,15,4,10
7486,Gerrard St E / Ted Reeve Dr,43.684261,-79.299332,24,5,19
7571,Highfield Rd / Gerrard St E - SMART,43.671685,-79.325176,19,14,5
";

/// Write a station file into `dir`
pub fn create_test_station_file(
    dir: &Path,
    filename: &str,
    content: &str,
) -> std::io::Result<std::path::PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}
