use anyhow::{Context, Result};
use clap::Parser;
use coronatracker::{
    cli::{Args, Command},
    config::Config,
    services::{country::CountryCodes, locations::LocationService},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let country_codes = match &config.country_codes_path {
        Some(path) => CountryCodes::load(path)
            .with_context(|| format!("Failed to load country codes from {}", path.display()))?,
        None => CountryCodes::builtin(),
    };

    let snapshot_path = args.snapshot_path(&config);
    let location_service = LocationService::from_snapshot(&snapshot_path, Arc::new(country_codes))
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;

    match &args.command {
        Command::Latest => print_json(&location_service.latest_response()),
        Command::Locations { timelines, .. } => {
            let query = args.command.query();
            print_json(&location_service.locations_response(&query, *timelines))
        }
        Command::Location { id, timelines } => {
            info!("Looking up location {}", id);
            let response = location_service.location_response(*id, *timelines)?;
            print_json(&response)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("Failed to serialize response")?;
    println!("{}", output);
    Ok(())
}
