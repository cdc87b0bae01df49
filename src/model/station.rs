use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StationDto {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Payload for creating or replacing a station
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StationPayload {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
