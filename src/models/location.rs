use crate::models::coordinates::Coordinates;
use crate::models::timeline::{Statistic, Timelines};
use crate::services::country::{self, CountryCodes};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Country reported by every county-level location.
pub const COUNTY_COUNTRY: &str = "US";

/// Most recent value of each tracked statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latest {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

impl Latest {
    pub fn new(confirmed: u64, deaths: u64, recovered: u64) -> Self {
        Self {
            confirmed,
            deaths,
            recovered,
        }
    }

    fn from_timelines(timelines: &Timelines) -> Self {
        let latest = |statistic: Statistic| {
            timelines
                .get(&statistic)
                .and_then(|timeline| timeline.latest())
                .unwrap_or(0)
        };

        Self {
            confirmed: latest(Statistic::Confirmed),
            deaths: latest(Statistic::Deaths),
            recovered: latest(Statistic::Recovered),
        }
    }
}

/// Totals saturate at `u64::MAX` instead of overflowing.
impl Add for Latest {
    type Output = Latest;

    fn add(self, other: Latest) -> Latest {
        Latest {
            confirmed: self.confirmed.saturating_add(other.confirmed),
            deaths: self.deaths.saturating_add(other.deaths),
            recovered: self.recovered.saturating_add(other.recovered),
        }
    }
}

impl Sum for Latest {
    fn sum<I: Iterator<Item = Latest>>(iter: I) -> Latest {
        iter.fold(Latest::default(), Add::add)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationDetail {
    Basic,
    Timelined { timelines: Timelines },
    County { state: String, county: String },
}

/// A place affected by the outbreak.
///
/// Built once from upstream data and never mutated afterwards. `country` and
/// `province` are always whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "LocationInput")]
pub struct Location {
    id: u64,
    country: String,
    province: String,
    coordinates: Coordinates,
    last_updated: String,
    latest: Latest,
    detail: LocationDetail,
}

impl Location {
    pub fn new(
        id: u64,
        country: &str,
        province: &str,
        coordinates: Coordinates,
        last_updated: impl Into<String>,
        latest: Latest,
    ) -> Self {
        Self {
            id,
            country: country.trim().to_string(),
            province: province.trim().to_string(),
            coordinates,
            last_updated: last_updated.into(),
            latest,
            detail: LocationDetail::Basic,
        }
    }

    /// Location whose counters come from the latest value of each series.
    pub fn timelined(
        id: u64,
        country: &str,
        province: &str,
        coordinates: Coordinates,
        last_updated: impl Into<String>,
        timelines: Timelines,
    ) -> Self {
        let latest = Latest::from_timelines(&timelines);

        Self {
            detail: LocationDetail::Timelined { timelines },
            ..Self::new(id, country, province, coordinates, last_updated, latest)
        }
    }

    /// US county location. Recovered cases are not tracked at this level.
    pub fn county(
        id: u64,
        state: &str,
        county: &str,
        coordinates: Coordinates,
        last_updated: impl Into<String>,
        confirmed: u64,
        deaths: u64,
    ) -> Self {
        let latest = Latest::new(confirmed, deaths, 0);

        Self {
            detail: LocationDetail::County {
                state: state.to_string(),
                county: county.to_string(),
            },
            ..Self::new(
                id,
                COUNTY_COUNTRY,
                county,
                coordinates,
                last_updated,
                latest,
            )
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    pub fn latest(&self) -> Latest {
        self.latest
    }

    pub fn detail(&self) -> &LocationDetail {
        &self.detail
    }

    pub fn timelines(&self) -> Option<&Timelines> {
        match &self.detail {
            LocationDetail::Timelined { timelines } => Some(timelines),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<&str> {
        match &self.detail {
            LocationDetail::County { state, .. } => Some(state.as_str()),
            _ => None,
        }
    }

    pub fn county_name(&self) -> Option<&str> {
        match &self.detail {
            LocationDetail::County { county, .. } => Some(county.as_str()),
            _ => None,
        }
    }

    pub fn country_code(&self, codes: &CountryCodes) -> String {
        country::country_code(&self.country, codes)
    }

    /// API view of this location. `timelines` only affects timelined locations.
    pub fn serialize(&self, codes: &CountryCodes, timelines: bool) -> LocationView<'_> {
        let mut view = LocationView {
            id: self.id,
            country: &self.country,
            country_code: self.country_code(codes),
            province: &self.province,
            coordinates: &self.coordinates,
            last_updated: &self.last_updated,
            latest: self.latest,
            timelines: None,
            state: None,
            county: None,
        };

        match &self.detail {
            LocationDetail::Basic => {}
            LocationDetail::Timelined { timelines: series } => {
                if timelines {
                    view.timelines = Some(series);
                }
            }
            LocationDetail::County { state, county } => {
                view.state = Some(state.as_str());
                view.county = Some(county.as_str());
            }
        }

        view
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationView<'a> {
    pub id: u64,
    pub country: &'a str,
    pub country_code: String,
    pub province: &'a str,
    pub coordinates: &'a Coordinates,
    pub last_updated: &'a str,
    pub latest: Latest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timelines: Option<&'a Timelines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<&'a str>,
}

/// Snapshot representation of a location, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum LocationInput {
    Basic {
        id: u64,
        country: String,
        #[serde(default)]
        province: String,
        coordinates: Coordinates,
        last_updated: String,
        #[serde(default)]
        latest: Latest,
    },
    Timelined {
        id: u64,
        country: String,
        #[serde(default)]
        province: String,
        coordinates: Coordinates,
        last_updated: String,
        #[serde(default)]
        timelines: Timelines,
    },
    County {
        id: u64,
        state: String,
        county: String,
        coordinates: Coordinates,
        last_updated: String,
        #[serde(default)]
        confirmed: u64,
        #[serde(default)]
        deaths: u64,
    },
}

impl From<LocationInput> for Location {
    fn from(input: LocationInput) -> Self {
        match input {
            LocationInput::Basic {
                id,
                country,
                province,
                coordinates,
                last_updated,
                latest,
            } => Location::new(id, &country, &province, coordinates, last_updated, latest),
            LocationInput::Timelined {
                id,
                country,
                province,
                coordinates,
                last_updated,
                timelines,
            } => Location::timelined(id, &country, &province, coordinates, last_updated, timelines),
            LocationInput::County {
                id,
                state,
                county,
                coordinates,
                last_updated,
                confirmed,
                deaths,
            } => Location::county(
                id,
                state.trim(),
                county.trim(),
                coordinates,
                last_updated,
                confirmed,
                deaths,
            ),
        }
    }
}
