//! Query string parsing utilities.

use crate::server::error::validation::ValidationError;

/// Parses a comma separated list of IDs such as `"1,2,3"`.
///
/// Blank entries are skipped so `"1,,2,"` yields `[1, 2]`.
pub fn parse_id_list(value: &str, field: &str) -> Result<Vec<i32>, ValidationError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<i32>().map_err(|_| {
                ValidationError::invalid(field, format!("\"{}\" is not a valid ID.", id))
            })
        })
        .collect()
}
