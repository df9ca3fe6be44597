use anyhow::{Context, Result};
use bikeshare_stations::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Nothing to do without a subcommand or a station file
    if args.command.is_none() && args.input_path.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match run(args) {
        Ok(()) => {
            // Results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<()> {
    let source = args
        .input_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<no input>".to_string());

    commands::run(args).with_context(|| format!("Station command failed for {}", source))?;
    Ok(())
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Bike-share Stations - station availability from a CSV snapshot");
    println!("==============================================================");
    println!();
    println!("Load a bike-share station file and query or update availability in memory.");
    println!("The station file is never written back.");
    println!();
    println!("USAGE:");
    println!("    bikeshare-stations --input <FILE> <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    info          Show name, availability and kiosk status of a station");
    println!("    total         Sum an integer column (id, capacity, bikes, docks)");
    println!("    docks         List stations with at least MIN docks available");
    println!("    nearest       Find the station nearest to a coordinate");
    println!("    rent          Rent one bike from a station");
    println!("    return        Return one bike to a station");
    println!("    redistribute  Spread bikes evenly relative to capacity");
    println!("    summary       Show network-wide totals (default)");
    println!();
    println!("OPTIONS:");
    println!("    -i, --input <FILE>         Station CSV file");
    println!("        --format <human|json>  Output format");
    println!(
        "        --no-kiosk-marker <T>  Name marker for stations without a kiosk [default: SMART]"
    );
    println!("    -v, --verbose              Increase logging verbosity");
    println!("    -q, --quiet                Only log errors");
    println!();
    println!("EXAMPLES:");
    println!("    bikeshare-stations -i stations.csv info 7090");
    println!("    bikeshare-stations -i stations.csv total bikes");
    println!(
        "    bikeshare-stations -i stations.csv nearest --lat 43.671134 --lon -79.325164 --kiosk"
    );
    println!("    bikeshare-stations -i stations.csv redistribute --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bikeshare-stations <COMMAND> --help");
}
