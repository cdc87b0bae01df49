use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainTypeDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainTypePayload {
    pub name: String,
}

/// Train as stored, the train type is referenced by ID
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainDto {
    pub id: i32,
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type: i32,
    pub total_capacity: i64,
}

/// Train list entry and detail, the train type is shown by name
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainListDto {
    pub id: i32,
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type: String,
    pub total_capacity: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainPayload {
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type: i32,
}
