use crate::models::location::{Latest, Location};
use crate::models::response::{LatestResponse, LocationResponse, LocationsResponse};
use crate::models::snapshot::Snapshot;
use crate::services::country::{CountryCodes, DEFAULT_COUNTRY_CODE};
use crate::utils::file::{read_json, FileError};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Location not found: {0}")]
    NotFound(u64),
    #[error("Duplicate location id: {0}")]
    DuplicateId(u64),
    #[error("File error: {0}")]
    FileError(#[from] FileError),
}

/// Optional filters, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct LocationQuery {
    pub country_code: Option<String>,
    pub province: Option<String>,
    pub county: Option<String>,
}

impl LocationQuery {
    fn matches(&self, location: &Location, codes: &CountryCodes) -> bool {
        if let Some(code) = non_empty(&self.country_code) {
            if location.country_code(codes) != code.to_uppercase() {
                return false;
            }
        }

        if let Some(province) = non_empty(&self.province) {
            if !same_text(location.province(), province) {
                return false;
            }
        }

        if let Some(county) = non_empty(&self.county) {
            match location.county_name() {
                Some(name) if same_text(name, county) => {}
                _ => return false,
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub struct LocationService {
    locations: Vec<Location>,
    country_codes: Arc<CountryCodes>,
    unknown_countries: BTreeSet<String>,
}

impl LocationService {
    pub fn new(
        locations: Vec<Location>,
        country_codes: Arc<CountryCodes>,
    ) -> Result<Self, LocationError> {
        let mut seen = HashSet::with_capacity(locations.len());
        for location in &locations {
            if !seen.insert(location.id()) {
                return Err(LocationError::DuplicateId(location.id()));
            }
        }

        let unknown_countries: BTreeSet<String> = locations
            .iter()
            .map(Location::country)
            .filter(|country| country_codes.lookup(country).is_none())
            .map(str::to_string)
            .collect();

        for country in &unknown_countries {
            warn!(
                "No country code found for '{}'. Using '{}'!",
                country, DEFAULT_COUNTRY_CODE
            );
        }

        Ok(Self {
            locations,
            country_codes,
            unknown_countries,
        })
    }

    pub fn from_snapshot(
        snapshot_path: &Path,
        country_codes: Arc<CountryCodes>,
    ) -> Result<Self, LocationError> {
        let snapshot: Snapshot = read_json(snapshot_path)?;

        info!(
            "Loaded {} locations from {} (source: {})",
            snapshot.locations.len(),
            snapshot_path.display(),
            snapshot.source.as_deref().unwrap_or("unknown")
        );

        Self::new(snapshot.locations, country_codes)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn country_codes(&self) -> &CountryCodes {
        &self.country_codes
    }

    /// Countries in the snapshot that resolve to the default code.
    pub fn unknown_countries(&self) -> &BTreeSet<String> {
        &self.unknown_countries
    }

    pub fn search(&self, query: &LocationQuery) -> Vec<&Location> {
        let matches: Vec<&Location> = self
            .locations
            .iter()
            .filter(|location| query.matches(location, &self.country_codes))
            .collect();

        debug!("Query {:?} matched {} locations", query, matches.len());
        matches
    }

    pub fn get(&self, id: u64) -> Result<&Location, LocationError> {
        self.locations
            .iter()
            .find(|location| location.id() == id)
            .ok_or(LocationError::NotFound(id))
    }

    /// Sum of the latest counters over every location.
    pub fn latest(&self) -> Latest {
        self.locations.iter().map(Location::latest).sum()
    }

    pub fn latest_response(&self) -> LatestResponse {
        LatestResponse {
            latest: self.latest(),
        }
    }

    pub fn locations_response(
        &self,
        query: &LocationQuery,
        timelines: bool,
    ) -> LocationsResponse<'_> {
        let matches = self.search(query);

        LocationsResponse {
            latest: matches.iter().map(|location| location.latest()).sum(),
            locations: matches
                .into_iter()
                .map(|location| location.serialize(&self.country_codes, timelines))
                .collect(),
        }
    }

    pub fn location_response(
        &self,
        id: u64,
        timelines: bool,
    ) -> Result<LocationResponse<'_>, LocationError> {
        let location = self.get(id)?;

        Ok(LocationResponse {
            location: location.serialize(&self.country_codes, timelines),
        })
    }
}
