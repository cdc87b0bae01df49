//! Utility functions shared by services and controllers.

pub mod time;
pub mod query;
