use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request payload was rejected before anything was persisted.
///
/// Every variant names the request field at fault so clients can show the message next to it.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Field is malformed or references a record that doesn't exist.
    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
    /// Numeric field lies outside its allowed range, e.g. a seat beyond the train's cargo.
    #[error("{field}: {message}")]
    OutOfRange { field: String, message: String },
    /// Field collides with an existing record, e.g. an already booked seat.
    #[error("{field}: {message}")]
    Conflict { field: String, message: String },
}

impl ValidationError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn conflict(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Invalid reference to a record that does not exist
    pub fn does_not_exist(field: impl Into<String>, id: i32) -> Self {
        Self::Invalid {
            field: field.into(),
            message: format!("Invalid pk \"{}\" - object does not exist.", id),
        }
    }

    /// Name of the request field at fault
    pub fn field(&self) -> &str {
        match self {
            Self::Invalid { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Conflict { field, .. } => field,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        let (status, field, message) = match self {
            Self::Invalid { field, message } | Self::OutOfRange { field, message } => {
                (StatusCode::BAD_REQUEST, field, message)
            }
            Self::Conflict { field, message } => (StatusCode::CONFLICT, field, message),
        };

        let body = ErrorDto::new(message.clone()).with_field(field, message);

        (status, Json(body)).into_response()
    }
}
