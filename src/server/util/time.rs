//! Time formatting utilities.

use chrono::NaiveDateTime;

/// Renders the time between departure and arrival as `"{days} days, {hours} hours"`.
///
/// Only whole units are shown, the remaining minutes are dropped.
///
/// # Example
/// ```ignore
/// // 26 hours 30 minutes
/// assert_eq!(travel_duration(departure, arrival), "1 days, 2 hours");
/// ```
pub fn travel_duration(departure_time: NaiveDateTime, arrival_time: NaiveDateTime) -> String {
    let duration = arrival_time - departure_time;
    let days = duration.num_days();
    let hours = duration.num_hours() - days * 24;

    format!("{} days, {} hours", days, hours)
}
