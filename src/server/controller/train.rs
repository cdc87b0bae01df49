use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::train::TrainPayload,
    server::{
        controller::util::{
            extract::{Json, Path, Query},
            get_user::{get_staff_from_session, get_user_from_session},
        },
        error::Error,
        model::app::AppState,
        service::train::{TrainFilter, TrainService},
    },
};

#[derive(Deserialize, Default)]
pub struct TrainListParams {
    pub name: Option<String>,
    pub train_types: Option<String>,
}

/// List trains with their train type name & total capacity
///
/// # Query parameters
/// - `name`: Case-insensitive substring of the train name
/// - `train_types`: Comma separated train type IDs, e.g. `1,3`
///
/// # Responses
/// - 200 (OK): Matching trains ordered by name
/// - 400 (Bad Request): `train_types` contains something other than IDs
/// - 401 (Unauthorized): No user in session
pub async fn list_trains(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TrainListParams>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let trains = TrainService::new(&state.db)
        .list(TrainFilter {
            name: params.name,
            train_types: params.train_types,
        })
        .await?;

    Ok((StatusCode::OK, Json(trains)))
}

pub async fn get_train(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let train = TrainService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(train)))
}

/// Create a train, staff only
///
/// # Responses
/// - 201 (Created): The train with its total capacity
/// - 400 (Bad Request): Missing train type or dimensions below 1
/// - 403 (Forbidden): User is not staff
/// - 409 (Conflict): Name already used by another train
pub async fn create_train(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TrainPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let train = TrainService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(train)))
}

pub async fn update_train(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TrainPayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let train = TrainService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(train)))
}

/// Delete a train along with its journeys, staff only
pub async fn delete_train(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    TrainService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
