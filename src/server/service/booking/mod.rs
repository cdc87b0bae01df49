//! Booking of seats on journeys.
//!
//! Orders group the tickets a user books. Every ticket, whether created on its own or as part
//! of an order, passes through [`validate::validate_ticket`] which enforces the seat bounds of
//! the journey's train and the one-ticket-per-seat rule. The unique index on
//! `(journey_id, cargo, seat)` backs the latter when two requests race.

pub mod order;
pub mod ticket;
pub mod validate;

#[cfg(test)]
mod tests;

use chrono::NaiveDateTime;

/// Text shown for an order wherever it is referenced by a ticket
pub(crate) fn order_label(email: &str, created_at: NaiveDateTime) -> String {
    format!("{} {}", email, created_at)
}
