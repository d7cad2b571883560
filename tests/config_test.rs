//! Environment handling for `Config::from_env`.
//!
//! Kept in its own test binary with a single test so no other test observes
//! the variables it sets.

use coronatracker::config::{Config, ConfigError};
use std::env;
use std::path::PathBuf;
use tracing::Level;

const VARS: [&str; 3] = ["SNAPSHOT_PATH", "COUNTRY_CODES_PATH", "LOG_LEVEL"];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env() -> Result<(), Box<dyn std::error::Error>> {
    clear_vars();

    let config = Config::from_env()?;
    assert_eq!(config.snapshot_path, PathBuf::from("./data/locations.json"));
    assert_eq!(config.country_codes_path, None);
    assert_eq!(config.log_level, Level::INFO);

    env::set_var("SNAPSHOT_PATH", "/srv/jhu.json");
    env::set_var("COUNTRY_CODES_PATH", "/srv/country-codes.json");
    env::set_var("LOG_LEVEL", "debug");
    let config = Config::from_env()?;
    assert_eq!(config.snapshot_path, PathBuf::from("/srv/jhu.json"));
    assert_eq!(
        config.country_codes_path,
        Some(PathBuf::from("/srv/country-codes.json"))
    );
    assert_eq!(config.log_level, Level::DEBUG);

    // blank override path is ignored
    env::set_var("COUNTRY_CODES_PATH", "   ");
    assert_eq!(Config::from_env()?.country_codes_path, None);

    env::set_var("LOG_LEVEL", "chatty");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidLogLevel(level)) if level == "chatty"
    ));

    clear_vars();
    Ok(())
}
