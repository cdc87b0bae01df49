use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ticket::{TicketDto, TicketListDto};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: i32,
    pub tickets: Vec<TicketDto>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderListDto {
    pub id: i32,
    pub tickets: Vec<TicketListDto>,
    pub created_at: NaiveDateTime,
}

/// A seat requested as part of an order
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderTicketPayload {
    pub cargo: i32,
    pub seat: i32,
    pub journey: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderPayload {
    pub tickets: Vec<OrderTicketPayload>,
}
