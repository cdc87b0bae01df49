use axum::{extract::State, http::StatusCode, response::IntoResponse};
use railbook::{
    model::ticket::{TicketDetailDto, TicketDto, TicketListDto, TicketPayload},
    server::controller::ticket::{
        create_ticket, delete_ticket, get_ticket, list_tickets, update_ticket,
    },
};
use railbook::server::controller::util::extract::{Json, Path};

use super::*;

fn payload(journey: i32, order: i32, cargo: i32, seat: i32) -> TicketPayload {
    TicketPayload {
        cargo,
        seat,
        journey,
        order,
    }
}

mod list_tickets {
    use super::*;

    /// Expect a regular user to only see tickets of their own orders
    #[tokio::test]
    async fn lists_own_tickets_for_user() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let other = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let own_order = test.booking().insert_order(user.id).await?;
        let other_order = test.booking().insert_order(other.id).await?;
        let own = test.booking().insert_ticket(journey.id, own_order.id, 1, 1).await?;
        test.booking()
            .insert_ticket(journey.id, other_order.id, 1, 2)
            .await?;
        login_as(&test, user.id).await;

        let resp = list_tickets(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let tickets: Vec<TicketListDto> = body_json(resp).await;
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, own.id);
        assert!(tickets[0].journey.starts_with("Journey on "));

        Ok(())
    }

    /// Expect staff to see every ticket
    #[tokio::test]
    async fn lists_all_tickets_for_staff() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        test.booking().insert_ticket(journey.id, order.id, 1, 2).await?;
        login_as(&test, staff.id).await;

        let resp = list_tickets(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let tickets: Vec<TicketListDto> = body_json(resp).await;
        assert_eq!(tickets.len(), 2);

        Ok(())
    }
}

mod get_ticket {
    use super::*;

    /// Expect the journey to be embedded in the detail
    #[tokio::test]
    async fn embeds_journey() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        let ticket = test.booking().insert_ticket(journey.id, order.id, 2, 4).await?;
        login_as(&test, user.id).await;

        let resp = get_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Path(ticket.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let detail: TicketDetailDto = body_json(resp).await;
        assert_eq!(detail.journey.id, journey.id);
        assert_eq!(detail.journey.available_tickets, 19);
        assert!(detail.order.starts_with(&user.email));

        Ok(())
    }
}

mod create_ticket {
    use super::*;

    /// Expect 201 when booking a free seat on an owned order
    #[tokio::test]
    async fn books_free_seat() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        login_as(&test, user.id).await;

        let resp = create_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Json(payload(journey.id, order.id, 2, 10)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let ticket: TicketDto = body_json(resp).await;
        assert_eq!((ticket.cargo, ticket.seat), (2, 10));

        Ok(())
    }

    /// Expect 409 when the seat is already booked
    #[tokio::test]
    async fn conflicts_on_taken_seat() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        test.booking().insert_ticket(journey.id, order.id, 1, 3).await?;
        login_as(&test, user.id).await;

        let resp = create_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Json(payload(journey.id, order.id, 1, 3)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 400 when attaching the ticket to someone else's order
    #[tokio::test]
    async fn rejects_foreign_order() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let other = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(other.id).await?;
        login_as(&test, user.id).await;

        let resp = create_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Json(payload(journey.id, order.id, 1, 1)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod update_ticket {
    use super::*;

    /// Expect keeping the same seat not to count as a conflict
    #[tokio::test]
    async fn keeps_own_seat() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        let ticket = test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, user.id).await;

        let resp = update_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Path(ticket.id),
            Json(payload(journey.id, order.id, 1, 1)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    /// Expect 400 when moving to a seat outside the train
    #[tokio::test]
    async fn rejects_seat_out_of_range() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        let ticket = test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, user.id).await;

        let resp = update_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Path(ticket.id),
            Json(payload(journey.id, order.id, 1, 0)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod delete_ticket {
    use super::*;

    /// Expect 404 when deleting another user's ticket
    #[tokio::test]
    async fn hides_other_users_ticket() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let other = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(other.id).await?;
        let ticket = test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, user.id).await;

        let resp = delete_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Path(ticket.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 204 when deleting an owned ticket
    #[tokio::test]
    async fn deletes_own_ticket() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        let ticket = test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, user.id).await;

        let resp = delete_ticket(
            State(test.into_app_state()),
            test.session.clone(),
            Path(ticket.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        Ok(())
    }
}
