use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::station::StationPayload,
    server::{
        controller::util::{
            extract::{Json, Path},
            get_user::{get_staff_from_session, get_user_from_session},
        },
        error::Error,
        model::app::AppState,
        service::station::StationService,
    },
};

/// List every station
///
/// # Responses
/// - 200 (OK): Stations ordered by name
/// - 401 (Unauthorized): No user in session
pub async fn list_stations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let stations = StationService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(stations)))
}

pub async fn get_station(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let station = StationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(station)))
}

/// Create a station, staff only
///
/// # Responses
/// - 201 (Created): The created station
/// - 400 (Bad Request): Blank name or coordinates out of range
/// - 403 (Forbidden): User is not staff
/// - 409 (Conflict): Name or coordinates already used by another station
pub async fn create_station(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<StationPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let station = StationService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(station)))
}

pub async fn update_station(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StationPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let station = StationService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(station)))
}

/// Delete a station along with its routes, staff only
pub async fn delete_station(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    StationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
