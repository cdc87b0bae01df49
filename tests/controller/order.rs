use axum::{extract::State, http::StatusCode, response::IntoResponse};
use railbook::{
    model::order::{OrderDto, OrderListDto, OrderPayload, OrderTicketPayload},
    server::controller::order::{
        create_order, delete_order, get_order, list_orders, update_order,
    },
};
use railbook::server::controller::util::extract::{Json, Path};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn order_of(tickets: &[(i32, i32, i32)]) -> OrderPayload {
    OrderPayload {
        tickets: tickets
            .iter()
            .map(|&(journey, cargo, seat)| OrderTicketPayload {
                journey,
                cargo,
                seat,
            })
            .collect(),
    }
}

mod create_order {
    use super::*;

    /// Expect 201 with every requested ticket written
    #[tokio::test]
    async fn creates_order_with_tickets() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        login_as(&test, user.id).await;

        let resp = create_order(
            State(test.into_app_state()),
            test.session.clone(),
            Json(order_of(&[(journey.id, 1, 1), (journey.id, 2, 10)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let order: OrderDto = body_json(resp).await;
        assert_eq!(order.tickets.len(), 2);
        assert!(order.tickets.iter().all(|t| t.order == order.id));

        Ok(())
    }

    /// Expect 400 for a seat beyond the train's places and nothing written
    #[tokio::test]
    async fn rejects_seat_out_of_range() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        login_as(&test, user.id).await;

        let resp = create_order(
            State(test.into_app_state()),
            test.session.clone(),
            Json(order_of(&[(journey.id, 1, 1), (journey.id, 1, 11)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(entity::prelude::BookingOrder::find().count(&test.db).await?, 0);
        assert_eq!(entity::prelude::Ticket::find().count(&test.db).await?, 0);

        Ok(())
    }

    /// Expect 400 for a cargo beyond the train's cargo count
    #[tokio::test]
    async fn rejects_cargo_out_of_range() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        login_as(&test, user.id).await;

        let resp = create_order(
            State(test.into_app_state()),
            test.session.clone(),
            Json(order_of(&[(journey.id, 0, 1)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 409 when the seat is already booked by someone else
    #[tokio::test]
    async fn conflicts_on_taken_seat() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let other = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let other_order = test.booking().insert_order(other.id).await?;
        test.booking()
            .insert_ticket(journey.id, other_order.id, 1, 5)
            .await?;
        login_as(&test, user.id).await;

        let resp = create_order(
            State(test.into_app_state()),
            test.session.clone(),
            Json(order_of(&[(journey.id, 1, 5)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(entity::prelude::BookingOrder::find().count(&test.db).await?, 1);

        Ok(())
    }

    /// Expect 409 when one request claims the same seat twice, with nothing written
    #[tokio::test]
    async fn conflicts_on_duplicate_within_request() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        login_as(&test, user.id).await;

        let resp = create_order(
            State(test.into_app_state()),
            test.session.clone(),
            Json(order_of(&[(journey.id, 2, 3), (journey.id, 2, 3)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(entity::prelude::Ticket::find().count(&test.db).await?, 0);

        Ok(())
    }

    /// Expect 400 for an order without tickets
    #[tokio::test]
    async fn rejects_empty_order() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        login_as(&test, user.id).await;

        let resp = create_order(
            State(test.into_app_state()),
            test.session.clone(),
            Json(order_of(&[])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 401 without a session
    #[tokio::test]
    async fn requires_login() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;

        let resp = create_order(
            State(test.into_app_state()),
            test.session.clone(),
            Json(order_of(&[(1, 1, 1)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod list_orders {
    use super::*;

    /// Expect only the caller's own orders
    #[tokio::test]
    async fn lists_own_orders_only() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let other = test.user().insert_mock_user().await?;
        let own = test.booking().insert_order(user.id).await?;
        test.booking().insert_order(other.id).await?;
        login_as(&test, user.id).await;

        let resp = list_orders(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let orders: Vec<OrderListDto> = body_json(resp).await;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, own.id);

        Ok(())
    }
}

mod get_order {
    use super::*;

    /// Expect 404 for another user's order
    #[tokio::test]
    async fn hides_other_users_order() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let other = test.user().insert_mock_user().await?;
        let order = test.booking().insert_order(other.id).await?;
        login_as(&test, user.id).await;

        let resp = get_order(
            State(test.into_app_state()),
            test.session.clone(),
            Path(order.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod update_order {
    use super::*;

    /// Expect the order's tickets to be replaced by the submitted set
    #[tokio::test]
    async fn replaces_tickets() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, user.id).await;

        let resp = update_order(
            State(test.into_app_state()),
            test.session.clone(),
            Path(order.id),
            Json(order_of(&[(journey.id, 1, 1), (journey.id, 1, 2)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let updated: OrderDto = body_json(resp).await;
        let seats: Vec<i32> = updated.tickets.iter().map(|t| t.seat).collect();
        assert_eq!(seats, vec![1, 2]);

        Ok(())
    }

    /// Expect the original tickets to survive a rejected update
    #[tokio::test]
    async fn keeps_tickets_on_rejected_update() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        let ticket = test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, user.id).await;

        let resp = update_order(
            State(test.into_app_state()),
            test.session.clone(),
            Path(order.id),
            Json(order_of(&[(journey.id, 3, 1)])),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let kept = entity::prelude::Ticket::find_by_id(ticket.id)
            .one(&test.db)
            .await?;
        assert!(kept.is_some());

        Ok(())
    }
}

mod delete_order {
    use super::*;

    /// Expect 204 with the order's tickets deleted as well
    #[tokio::test]
    async fn deletes_order_and_tickets() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, user.id).await;

        let resp = delete_order(
            State(test.into_app_state()),
            test.session.clone(),
            Path(order.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(entity::prelude::Ticket::find().count(&test.db).await?, 0);

        Ok(())
    }
}
