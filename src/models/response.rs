use crate::models::location::{Latest, LocationView};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LatestResponse {
    pub latest: Latest,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationsResponse<'a> {
    pub latest: Latest,
    pub locations: Vec<LocationView<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse<'a> {
    pub location: LocationView<'a>,
}
