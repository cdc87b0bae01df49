//! Request and response payloads exposed by the HTTP API.
//!
//! List views are deliberately lighter than detail views: lists show names in place of
//! nested objects while detail views embed the related records.

pub mod api;
pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod user;
