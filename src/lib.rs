//! Railway booking administration API.
//!
//! `model` holds the request and response payloads shared by every HTTP endpoint, `server`
//! holds the backend: routing, controllers, services, repositories and error handling.

pub mod model;
pub mod server;
