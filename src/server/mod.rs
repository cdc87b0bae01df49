//! Server application core modules.
//!
//! This module contains all server-side functionality for railbook: configuration, HTTP
//! routing, session based authentication, the booking rules and database access. Requests flow
//! from controllers through services to repositories.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
