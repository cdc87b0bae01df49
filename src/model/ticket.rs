use serde::{Deserialize, Serialize};

use crate::model::journey::JourneyListDto;

/// Ticket as stored, related records are referenced by ID
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TicketDto {
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub journey: i32,
    pub order: i32,
}

/// Ticket list entry with journey and order shown as text
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketListDto {
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub journey: String,
    pub order: String,
}

/// Ticket detail with the journey embedded
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketDetailDto {
    pub id: i32,
    pub cargo: i32,
    pub seat: i32,
    pub journey: JourneyListDto,
    pub order: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketPayload {
    pub cargo: i32,
    pub seat: i32,
    pub journey: i32,
    pub order: i32,
}
