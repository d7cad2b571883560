use clap::Parser;
use coronatracker::cli::{Args, Command};
use coronatracker::config::{parse_log_level, Config, ConfigError};
use std::path::PathBuf;
use tracing::Level;

fn config() -> Config {
    Config {
        snapshot_path: PathBuf::from("./data/locations.json"),
        country_codes_path: None,
        log_level: Level::INFO,
    }
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("debug").ok(), Some(Level::DEBUG));
    assert_eq!(parse_log_level(" WARN ").ok(), Some(Level::WARN));
    assert!(matches!(
        parse_log_level("loud"),
        Err(ConfigError::InvalidLogLevel(_))
    ));
}

#[test]
fn test_locations_command_builds_query() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from([
        "coronatracker",
        "locations",
        "--country-code",
        "us",
        "--county",
        "King",
        "--timelines",
    ])?;

    assert!(matches!(
        args.command,
        Command::Locations {
            timelines: true,
            ..
        }
    ));
    let query = args.command.query();
    assert_eq!(query.country_code.as_deref(), Some("us"));
    assert_eq!(query.county.as_deref(), Some("King"));
    assert_eq!(query.province, None);
    assert_eq!(args.snapshot_path(&config()), config().snapshot_path);

    Ok(())
}

#[test]
fn test_input_overrides_snapshot_path() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["coronatracker", "location", "3", "--input", "/tmp/snap.json"])?;

    assert!(matches!(
        args.command,
        Command::Location {
            id: 3,
            timelines: false
        }
    ));
    assert_eq!(args.snapshot_path(&config()), PathBuf::from("/tmp/snap.json"));
    assert!(args.command.query().country_code.is_none());

    Ok(())
}
