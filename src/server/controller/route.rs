use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::route::RoutePayload,
    server::{
        controller::util::{
            extract::{Json, Path},
            get_user::{get_staff_from_session, get_user_from_session},
        },
        error::Error,
        model::app::AppState,
        service::route::RouteService,
    },
};

/// List routes with source & destination shown by station name
pub async fn list_routes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let routes = RouteService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(routes)))
}

/// Retrieve a route with both stations embedded
///
/// # Responses
/// - 200 (OK): Route detail
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): Route does not exist
pub async fn get_route(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let route = RouteService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(route)))
}

/// Create a route between two stations, staff only
///
/// # Responses
/// - 201 (Created): The created route with station IDs
/// - 400 (Bad Request): Missing station, identical stations or non positive distance
/// - 403 (Forbidden): User is not staff
/// - 409 (Conflict): The stations are already connected in this direction
pub async fn create_route(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RoutePayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let route = RouteService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(route)))
}

pub async fn update_route(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RoutePayload>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    let route = RouteService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(route)))
}

/// Delete a route along with its journeys, staff only
pub async fn delete_route(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_staff_from_session(&state, &session).await?;

    RouteService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
