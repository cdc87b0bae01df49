//! HTTP routing configuration.
//!
//! Every endpoint lives under `/api`. Collections accept `GET` & `POST`, items accept `GET`,
//! `PUT` & `DELETE`.

use axum::{routing::get, routing::post, Router};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints.
///
/// The returned router still needs its state and the session layer.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/stations",
            get(controller::station::list_stations).post(controller::station::create_station),
        )
        .route(
            "/api/stations/{id}",
            get(controller::station::get_station)
                .put(controller::station::update_station)
                .delete(controller::station::delete_station),
        )
        .route(
            "/api/routes",
            get(controller::route::list_routes).post(controller::route::create_route),
        )
        .route(
            "/api/routes/{id}",
            get(controller::route::get_route)
                .put(controller::route::update_route)
                .delete(controller::route::delete_route),
        )
        .route(
            "/api/train_types",
            get(controller::train_type::list_train_types)
                .post(controller::train_type::create_train_type),
        )
        .route(
            "/api/train_types/{id}",
            get(controller::train_type::get_train_type)
                .put(controller::train_type::update_train_type)
                .delete(controller::train_type::delete_train_type),
        )
        .route(
            "/api/trains",
            get(controller::train::list_trains).post(controller::train::create_train),
        )
        .route(
            "/api/trains/{id}",
            get(controller::train::get_train)
                .put(controller::train::update_train)
                .delete(controller::train::delete_train),
        )
        .route(
            "/api/crews",
            get(controller::crew::list_crews).post(controller::crew::create_crew),
        )
        .route(
            "/api/crews/{id}",
            get(controller::crew::get_crew)
                .put(controller::crew::update_crew)
                .delete(controller::crew::delete_crew),
        )
        .route(
            "/api/journeys",
            get(controller::journey::list_journeys).post(controller::journey::create_journey),
        )
        .route(
            "/api/journeys/{id}",
            get(controller::journey::get_journey)
                .put(controller::journey::update_journey)
                .delete(controller::journey::delete_journey),
        )
        .route(
            "/api/orders",
            get(controller::order::list_orders).post(controller::order::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(controller::order::get_order)
                .put(controller::order::update_order)
                .delete(controller::order::delete_order),
        )
        .route(
            "/api/tickets",
            get(controller::ticket::list_tickets).post(controller::ticket::create_ticket),
        )
        .route(
            "/api/tickets/{id}",
            get(controller::ticket::get_ticket)
                .put(controller::ticket::update_ticket)
                .delete(controller::ticket::delete_ticket),
        )
        .route("/api/user/register", post(controller::user::register))
        .route("/api/user/login", post(controller::user::login))
        .route("/api/user/logout", post(controller::user::logout))
        .route(
            "/api/user/me",
            get(controller::user::get_me).put(controller::user::update_me),
        )
}
