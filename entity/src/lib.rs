//! SeaORM entities for the railway booking schema.

pub mod prelude;

pub mod booking_order;
pub mod crew;
pub mod journey;
pub mod journey_crew;
pub mod railbook_user;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
