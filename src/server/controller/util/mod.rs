//! Helpers shared by controllers.

pub mod extract;
pub mod get_user;
