use crate::config::Config;
use crate::services::locations::LocationQuery;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coronatracker",
    about = "Serializes coronavirus location statistics from an upstream snapshot",
    version,
    author
)]
pub struct Args {
    /// Snapshot file to read instead of SNAPSHOT_PATH
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Totals over every location
    Latest,
    /// Locations matching the given filters
    Locations {
        #[arg(long)]
        country_code: Option<String>,
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        county: Option<String>,
        #[arg(long)]
        timelines: bool,
    },
    /// A single location by id
    Location {
        id: u64,
        #[arg(long)]
        timelines: bool,
    },
}

impl Args {
    pub fn snapshot_path(&self, config: &Config) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| config.snapshot_path.clone())
    }
}

impl Command {
    pub fn query(&self) -> LocationQuery {
        match self {
            Command::Locations {
                country_code,
                province,
                county,
                ..
            } => LocationQuery {
                country_code: country_code.clone(),
                province: province.clone(),
                county: county.clone(),
            },
            _ => LocationQuery::default(),
        }
    }
}
