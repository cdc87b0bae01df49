use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::train::TrainTypePayload,
    server::{
        controller::util::{
            extract::{Json, Path},
            get_user::{get_staff_from_session, get_user_from_session},
        },
        error::Error,
        model::app::AppState,
        service::train_type::TrainTypeService,
    },
};

pub async fn list_train_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let train_types = TrainTypeService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(train_types)))
}

pub async fn get_train_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let train_type = TrainTypeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(train_type)))
}

/// Create a train type, staff only
pub async fn create_train_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TrainTypePayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let train_type = TrainTypeService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(train_type)))
}

pub async fn update_train_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TrainTypePayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let train_type = TrainTypeService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(train_type)))
}

/// Delete a train type along with its trains, staff only
pub async fn delete_train_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    TrainTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
