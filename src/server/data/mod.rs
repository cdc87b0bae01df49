//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over [`sea_orm::ConnectionTrait`] so
//! the same code runs against a pooled connection or inside a transaction.

pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;
