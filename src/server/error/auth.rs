use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User ID {0:?} attempted an action that requires staff permissions")]
    StaffRequired(i32),
    #[error("Failed to login user due to invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    fn not_authenticated() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto::new(
                "Authentication credentials were not provided.",
            )),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::not_authenticated()
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                Self::not_authenticated()
            }
            Self::StaffRequired(user_id) => {
                tracing::debug!(
                    user_id = %user_id,
                    "{}",
                    self
                );

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        "You do not have permission to perform this action.",
                    )),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new(
                        "Unable to log in with provided credentials.",
                    )),
                )
                    .into_response()
            }
        }
    }
}
