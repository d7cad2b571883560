use crate::models::location::Location;
use serde::Deserialize;

/// Locations as handed over by an upstream data fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub source: Option<String>,
    pub locations: Vec<Location>,
}
