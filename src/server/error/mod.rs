//! Error types for the railbook server.
//!
//! Domain errors (authentication, configuration, request validation) are defined in their own
//! modules and aggregated into [`Error`] together with library errors. Every error implements
//! `IntoResponse` so controllers can return `Result<impl IntoResponse, Error>` and let `?`
//! produce the matching HTTP response.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Main error type for the railbook server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or permission error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request payload failed validation (bounds, uniqueness, missing references).
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested resource does not exist, or isn't visible to the caller.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in railbook's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing failed.
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// Socket error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::invalid("non_field_errors", rejection.body_text()).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::invalid("path", rejection.body_text()).into()
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::invalid("query", rejection.body_text()).into()
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and references to missing records
/// - 401 Unauthorized / 403 Forbidden - Authentication and permission failures
/// - 404 Not Found - Missing resources
/// - 409 Conflict - Uniqueness violations, including those only caught by the database
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound(resource) => {
                tracing::debug!("{} not found", resource);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new(format!("{} not found", resource))),
                )
                    .into_response()
            }
            Self::DbErr(err) => match err.sql_err() {
                // Two requests raced past validation, the store decided which one won
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "Unique constraint violation");

                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto::new("Resource conflicts with an existing record")),
                    )
                        .into_response()
                }
                Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                    tracing::debug!(detail = %detail, "Foreign key constraint violation");

                    (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorDto::new("Referenced resource does not exist")),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
impl From<railbook_test_utils::TestError> for Error {
    fn from(err: railbook_test_utils::TestError) -> Self {
        match err {
            railbook_test_utils::TestError::DbErr(e) => Self::DbErr(e),
            railbook_test_utils::TestError::SessionError(e) => Self::SessionError(e),
        }
    }
}
