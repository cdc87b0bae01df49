//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored with tower-sessions.

pub mod user;
