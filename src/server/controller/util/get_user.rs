use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Same as [`get_user_from_session`] but also requires staff permissions
///
/// # Returns
/// - `Err(Error::AuthError(StaffRequired))`: User is logged in but not staff
pub async fn get_staff_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let user = get_user_from_session(state, session).await?;

    if !user.is_staff {
        return Err(Error::AuthError(AuthError::StaffRequired(user.id)));
    }

    Ok(user)
}
