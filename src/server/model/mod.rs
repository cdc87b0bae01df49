//! Server application models.
//!
//! This module contains the application state shared by every handler and the typed wrappers
//! around session data.

pub mod app;
pub mod session;
