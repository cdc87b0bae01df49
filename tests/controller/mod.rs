//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors. The session comes from an in-memory
//! store, so logging in amounts to inserting the user ID into it.

mod journey;
mod order;
mod station;
mod ticket;
mod train;
mod user;

use railbook_test_utils::prelude::*;

use crate::util::{body_json, login_as, TestContextExt};
