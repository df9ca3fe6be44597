//! Commands that change station availability: rent, return, redistribute
//!
//! Changes apply to the in-memory network only and are reported on stdout.

use super::shared::{CommandReport, emit, print_station_table};
use crate::app::models::{RentalOutcome, StationId};
use crate::app::services::station_network::StationNetwork;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};
use colored::Colorize;
use serde_json::json;

/// Rent one bike from a station
pub fn run_rent(
    network: &mut StationNetwork,
    id: StationId,
    format: OutputFormat,
) -> Result<CommandReport> {
    let outcome = network.rent_bike(id);
    report_rental(network, id, "rent", outcome, format)
}

/// Return one bike to a station
pub fn run_return(
    network: &mut StationNetwork,
    id: StationId,
    format: OutputFormat,
) -> Result<CommandReport> {
    let outcome = network.return_bike(id);
    report_rental(network, id, "return", outcome, format)
}

fn report_rental(
    network: &StationNetwork,
    id: StationId,
    action: &str,
    outcome: RentalOutcome,
    format: OutputFormat,
) -> Result<CommandReport> {
    if outcome == RentalOutcome::NotFound {
        return Err(Error::station_not_found(id));
    }

    let info = network.station_info(id);

    emit(
        format,
        &json!({ "action": action, "id": id, "outcome": outcome, "station": &info }),
        || {
            let status = match outcome {
                RentalOutcome::Completed => outcome.to_string().green(),
                _ => outcome.to_string().red(),
            };
            println!("Bike {} at station {}: {}", action, id, status);
            if let Some(info) = &info {
                println!(
                    "  {} bikes, {} docks available",
                    info.bikes_available, info.docks_available
                );
            }
        },
    )?;

    Ok(CommandReport {
        summary: format!("bike {} at station {} {}", action, id, outcome),
        stations_loaded: network.station_count(),
        modified: outcome.is_completed(),
    })
}

/// Redistribute bikes across all stations
pub fn run_redistribute(
    network: &mut StationNetwork,
    format: OutputFormat,
) -> Result<CommandReport> {
    let net_removed = network.redistribute_bikes();

    emit(
        format,
        &json!({ "net_bikes_removed": net_removed, "stations": network.stations() }),
        || {
            println!("Net bikes removed: {}", net_removed.to_string().bold());
            println!();
            print_station_table(network);
        },
    )?;

    Ok(CommandReport {
        summary: format!("redistributed bikes (net removed {})", net_removed),
        stations_loaded: network.station_count(),
        modified: true,
    })
}
