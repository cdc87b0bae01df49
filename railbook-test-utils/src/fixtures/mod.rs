//! Test fixture modules for database record creation.
//!
//! - `user` - railbook users
//! - `network` - stations and routes
//! - `fleet` - train types, trains and crews
//! - `booking` - journeys, orders and tickets

pub mod booking;
pub mod fleet;
pub mod network;
pub mod user;
