use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{crew::CrewDto, route::RouteListDto, train::TrainDto};

/// Journey as stored, related records are referenced by ID
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JourneyDto {
    pub id: i32,
    pub route: i32,
    pub train: i32,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub crew: Vec<i32>,
    pub travel_duration: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JourneyListDto {
    pub id: i32,
    pub train_name: String,
    pub source: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub travel_duration: String,
    pub available_tickets: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JourneyDetailDto {
    pub id: i32,
    pub route: RouteListDto,
    pub train: TrainDto,
    pub crew: Vec<CrewDto>,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub travel_duration: String,
    pub available_seats: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JourneyPayload {
    pub route: i32,
    pub train: i32,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    #[serde(default)]
    pub crew: Vec<i32>,
}
