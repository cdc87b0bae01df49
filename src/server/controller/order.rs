use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::order::OrderPayload,
    server::{
        controller::util::{extract::{Json, Path}, get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::booking::order::OrderService,
    },
};

/// List the logged in user's orders, newest first
///
/// # Responses
/// - 200 (OK): Orders with their tickets described as text
/// - 401 (Unauthorized): No user in session
pub async fn list_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let orders = OrderService::new(&state.db).list(user.id).await?;

    Ok((StatusCode::OK, Json(orders)))
}

pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db).get(user.id, id).await?;

    Ok((StatusCode::OK, Json(order)))
}

/// Book one or more seats as a new order
///
/// Either every ticket is booked or none is.
///
/// # Responses
/// - 201 (Created): The order with its tickets
/// - 400 (Bad Request): Empty ticket list, missing journey, or seat/cargo out of range
/// - 401 (Unauthorized): No user in session
/// - 409 (Conflict): A requested seat is already booked
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OrderPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db).create(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Replace the tickets of an order, with the same all or nothing semantics as creation
pub async fn update_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<OrderPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let order = OrderService::new(&state.db)
        .update(user.id, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

pub async fn delete_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    OrderService::new(&state.db).delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
