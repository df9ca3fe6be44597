//! Read-only station commands: info, total, docks, nearest and summary

use super::shared::{CommandReport, emit, print_station_table};
use crate::app::models::{StationField, StationId};
use crate::app::services::station_network::StationNetwork;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::Colorize;
use serde_json::json;

/// Show name, availability and kiosk status of one station
pub fn run_info(
    network: &StationNetwork,
    id: StationId,
    format: OutputFormat,
) -> Result<CommandReport> {
    let info = network
        .station_info(id)
        .ok_or_else(|| Error::station_not_found(id))?;

    emit(format, &json!({ "id": id, "station": &info }), || {
        println!("{} {}", "Station".bold(), id.to_string().cyan());
        println!("  Name:            {}", info.name);
        println!("  Bikes available: {}", info.bikes_available);
        println!("  Docks available: {}", info.docks_available);
        println!(
            "  Kiosk:           {}",
            if info.has_kiosk { "yes".green() } else { "no".yellow() }
        );
    })?;

    Ok(report(network, format!("station {} found", id)))
}

/// Sum one integer column over all stations
pub fn run_total(
    network: &StationNetwork,
    field: StationField,
    format: OutputFormat,
) -> Result<CommandReport> {
    let total = network.column_total(field);

    emit(format, &json!({ "field": field, "total": total }), || {
        println!("Total {}: {}", field.to_string().bold(), total);
    })?;

    Ok(report(network, format!("{} total {}", field, total)))
}

/// List ids of stations with at least `min` docks available
pub fn run_docks(
    network: &StationNetwork,
    min: u32,
    format: OutputFormat,
) -> Result<CommandReport> {
    let ids = network.stations_with_min_docks(min);

    emit(format, &json!({ "min_docks": min, "station_ids": &ids }), || {
        println!(
            "{} stations with at least {} docks available:",
            ids.len().to_string().bold(),
            min
        );
        for id in &ids {
            println!("  {}", id);
        }
    })?;

    Ok(report(
        network,
        format!("{} stations with at least {} docks", ids.len(), min),
    ))
}

/// Find the station nearest to a coordinate
pub fn run_nearest(
    network: &StationNetwork,
    lat: f64,
    lon: f64,
    require_kiosk: bool,
    format: OutputFormat,
) -> Result<CommandReport> {
    let Some(nearest) = network.nearest_station(lat, lon, require_kiosk) else {
        let message = if require_kiosk {
            "No station with a kiosk to choose from"
        } else {
            "No stations to choose from"
        };
        return Err(Error::data_validation(message));
    };

    emit(
        format,
        &json!({
            "latitude": lat,
            "longitude": lon,
            "require_kiosk": require_kiosk,
            "station_id": nearest,
        }),
        || {
            let qualifier = if require_kiosk { " with a kiosk" } else { "" };
            println!(
                "Nearest station{} to ({}, {}): {}",
                qualifier,
                lat,
                lon,
                nearest.to_string().cyan().bold()
            );
            if let Some(station) = network.get_station(nearest) {
                println!("  {}", station.name);
            }
        },
    )?;

    Ok(report(network, format!("nearest station {}", nearest)))
}

/// Show network-wide totals
pub fn run_summary(network: &StationNetwork, format: OutputFormat) -> Result<CommandReport> {
    let stats = network.statistics();

    emit(format, &stats, || {
        println!("{}", "Station Network Summary".bold());
        println!("=======================");
        println!("Stations:       {}", stats.station_count);
        println!("With kiosk:     {}", stats.kiosk_count);
        println!("Capacity:       {}", stats.total_capacity);
        println!("Bikes:          {}", stats.total_bikes);
        println!("Docks:          {}", stats.total_docks);
        println!("Fleet ratio:    {:.1}%", stats.bike_ratio * 100.0);
        println!();
        print_station_table(network);
    })?;

    let summary = format!("{} stations summarised", stats.station_count);
    Ok(report(network, summary))
}

fn report(network: &StationNetwork, summary: String) -> CommandReport {
    CommandReport {
        summary,
        stations_loaded: network.station_count(),
        modified: false,
    }
}
