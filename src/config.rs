use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid LOG_LEVEL: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub country_codes_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            snapshot_path: env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/locations.json")),
            country_codes_path: env::var("COUNTRY_CODES_PATH")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            log_level: parse_log_level(&log_level)?,
        })
    }
}

pub fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))
}
