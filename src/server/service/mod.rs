//! Service layer for business logic.
//!
//! Services validate requests, enforce uniqueness and booking rules, compute derived values
//! and shape repository models into the DTOs returned by controllers. Multi-row writes such
//! as orders and journey crews run inside a single database transaction.

pub mod booking;
pub mod crew;
pub mod journey;
pub mod password;
pub mod route;
pub mod station;
pub mod train;
pub mod train_type;
pub mod user;
