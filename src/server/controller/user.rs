use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::user::{LoginPayload, RegisterPayload, UpdateUserPayload},
    server::{
        controller::util::{extract::Json, get_user::get_user_from_session},
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Register a new account
///
/// # Responses
/// - 201 (Created): The created user
/// - 400 (Bad Request): Malformed email or password shorter than five characters
/// - 409 (Conflict): Email already registered
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email & password, storing the user in the session
///
/// # Responses
/// - 200 (OK): The logged in user
/// - 400 (Bad Request): Email or password is wrong
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).login(payload).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 204 (No Content): Logged out, or there was no one to log out
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear sessions that hold a user
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Update the logged in user's names and optionally their password
pub async fn update_me(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
