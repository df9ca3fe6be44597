//! Command implementations for the bike-share station CLI
//!
//! This module dispatches parsed arguments to the command handlers. Read-only
//! queries live in `query`, commands that change availability in `rental`.

pub mod query;
pub mod rental;
pub mod shared;

pub use shared::CommandReport;

use crate::Result;
use crate::cli::args::{Args, Commands};
use tracing::{debug, info};

/// Main command runner
///
/// Sets up logging, validates arguments, loads the station file and runs the
/// requested operation against the in-memory network.
pub fn run(args: Args) -> Result<CommandReport> {
    shared::setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    let mut network = shared::load_network(&args, &config)?;
    let format = args.output_format;

    let report = match args.get_command() {
        Commands::Info { id } => query::run_info(&network, id, format)?,
        Commands::Total { field } => query::run_total(&network, field, format)?,
        Commands::Docks { min } => query::run_docks(&network, min, format)?,
        Commands::Nearest { lat, lon, kiosk } => {
            query::run_nearest(&network, lat, lon, kiosk, format)?
        }
        Commands::Summary => query::run_summary(&network, format)?,
        Commands::Rent { id } => rental::run_rent(&mut network, id, format)?,
        Commands::Return { id } => rental::run_return(&mut network, id, format)?,
        Commands::Redistribute => rental::run_redistribute(&mut network, format)?,
    };

    info!(
        "Command finished: {} ({} stations loaded)",
        report.summary, report.stations_loaded
    );
    if report.modified {
        info!("Station changes were applied in memory only; the input file is unchanged");
    }
    Ok(report)
}
