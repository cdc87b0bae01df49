use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::ticket::TicketPayload,
    server::{
        controller::util::{extract::{Json, Path}, get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::booking::ticket::TicketService,
    },
};

/// List tickets of the logged in user's orders, or every ticket for staff
pub async fn list_tickets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tickets = TicketService::new(&state.db).list(&user).await?;

    Ok((StatusCode::OK, Json(tickets)))
}

/// Retrieve a ticket with its journey embedded
///
/// # Responses
/// - 200 (OK): Ticket detail
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): Ticket does not exist or belongs to another user
pub async fn get_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ticket = TicketService::new(&state.db).get(&user, id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Book a seat on one of the logged in user's orders
///
/// # Responses
/// - 201 (Created): The booked ticket
/// - 400 (Bad Request): Order not owned by the user, missing journey, or seat/cargo out of range
/// - 401 (Unauthorized): No user in session
/// - 409 (Conflict): Seat already booked
pub async fn create_ticket(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<TicketPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ticket = TicketService::new(&state.db).create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn update_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<TicketPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let ticket = TicketService::new(&state.db)
        .update(&user, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(ticket)))
}

pub async fn delete_ticket(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    TicketService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
