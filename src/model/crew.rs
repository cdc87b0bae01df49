use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CrewDto {
    pub id: i32,
    pub full_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrewPayload {
    pub first_name: String,
    pub last_name: String,
}
