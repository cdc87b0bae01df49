use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::crew::CrewPayload,
    server::{
        controller::util::{
            extract::{Json, Path},
            get_user::{get_staff_from_session, get_user_from_session},
        },
        error::Error,
        model::app::AppState,
        service::crew::CrewService,
    },
};

/// List crew members by full name
pub async fn list_crews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let crews = CrewService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(crews)))
}

pub async fn get_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let crew = CrewService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(crew)))
}

/// Create a crew member from first & last name, staff only
///
/// # Responses
/// - 201 (Created): The crew member with their full name
/// - 403 (Forbidden): User is not staff
/// - 409 (Conflict): A crew member with the same name exists
pub async fn create_crew(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CrewPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let crew = CrewService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(crew)))
}

pub async fn update_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CrewPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let crew = CrewService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(crew)))
}

/// Delete a crew member and their journey assignments, staff only
pub async fn delete_crew(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    CrewService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
