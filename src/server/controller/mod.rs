//! HTTP controller endpoints for the railbook API.
//!
//! Axum handlers per resource. Each handler resolves the user from the session, checks
//! permissions, calls the matching service and returns its DTO as JSON. Reference data reads
//! need a logged in user while writes need staff; orders & tickets are scoped to their owner.

pub mod crew;
pub mod journey;
pub mod order;
pub mod route;
pub mod station;
pub mod ticket;
pub mod train;
pub mod train_type;
pub mod user;
pub mod util;
