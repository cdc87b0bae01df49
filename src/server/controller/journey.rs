use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::journey::JourneyPayload,
    server::{
        controller::util::{
            extract::{Json, Path},
            get_user::{get_staff_from_session, get_user_from_session},
        },
        error::Error,
        model::app::AppState,
        service::journey::JourneyService,
    },
};

/// List journeys ordered by departure
///
/// # Responses
/// - 200 (OK): Journeys with train name, station names, travel duration & available tickets
/// - 401 (Unauthorized): No user in session
pub async fn list_journeys(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let journeys = JourneyService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(journeys)))
}

/// Retrieve a journey with its route, train, crew and available seats
pub async fn get_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let journey = JourneyService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(journey)))
}

/// Schedule a journey and assign its crew, staff only
///
/// # Responses
/// - 201 (Created): The journey with route, train & crew IDs
/// - 400 (Bad Request): Missing route, train or crew member, or arrival not after departure
/// - 403 (Forbidden): User is not staff
pub async fn create_journey(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<JourneyPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let journey = JourneyService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(journey)))
}

/// Replace a journey and its crew, staff only
pub async fn update_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<JourneyPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let journey = JourneyService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(journey)))
}

/// Delete a journey along with its tickets, staff only
pub async fn delete_journey(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    JourneyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
