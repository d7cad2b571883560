//! Coronatracker - location data model for coronavirus statistics
//!
//! This library provides the locations tracked by the service, the time series
//! they are built from, country-code resolution and the JSON shapes served to
//! API clients.

pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use models::coordinates::Coordinates;
pub use models::location::{Latest, Location, LocationDetail, LocationView};
pub use models::timeline::{Statistic, Timeline, Timelines};
pub use services::country::{country_code, CountryCodes, DEFAULT_COUNTRY_CODE};
pub use services::locations::{LocationQuery, LocationService};
