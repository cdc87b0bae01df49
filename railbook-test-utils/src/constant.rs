//! Shared constants for test fixtures.

/// Password digest stored for fixture users, it never matches a hashed password so fixture
/// users can't log in.
pub static UNUSABLE_PASSWORD_HASH: &str = "!";

/// Hours between departure and arrival of journeys created by fixtures.
pub static TEST_JOURNEY_HOURS: i64 = 2;
