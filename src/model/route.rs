use serde::{Deserialize, Serialize};

use crate::model::station::StationDto;

/// Route as stored, station references are IDs
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteDto {
    pub id: i32,
    pub source: i32,
    pub destination: i32,
    pub distance: i32,
}

/// Route list entry, stations are shown by name
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteListDto {
    pub id: i32,
    pub source: String,
    pub destination: String,
    pub distance: i32,
}

/// Route detail with both stations embedded
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteDetailDto {
    pub id: i32,
    pub source: StationDto,
    pub destination: StationDto,
    pub distance: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutePayload {
    pub source: i32,
    pub destination: i32,
    pub distance: i32,
}
