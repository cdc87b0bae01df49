use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Duration;
use railbook::{
    model::journey::{JourneyDetailDto, JourneyDto, JourneyListDto, JourneyPayload},
    server::controller::journey::{create_journey, delete_journey, get_journey, list_journeys},
};
use railbook::server::controller::util::extract::{Json, Path};
use railbook_test_utils::fixtures::booking::departure_time;
use sea_orm::EntityTrait;

use super::*;

mod list_journeys {
    use super::*;

    /// Expect available tickets to drop by one for every booked seat
    #[tokio::test]
    async fn counts_available_tickets() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, _) = test.booking().insert_mock_journey(2, 10).await?;
        let order = test.booking().insert_order(user.id).await?;
        test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        test.booking().insert_ticket(journey.id, order.id, 2, 7).await?;
        login_as(&test, user.id).await;

        let resp = list_journeys(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let journeys: Vec<JourneyListDto> = body_json(resp).await;
        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].available_tickets, 18);
        assert_eq!(journeys[0].travel_duration, "0 days, 2 hours");

        Ok(())
    }
}

mod get_journey {
    use super::*;

    /// Expect crew, route & train embedded along with available seats
    #[tokio::test]
    async fn returns_detail() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (journey, train) = test.booking().insert_mock_journey(3, 4).await?;
        let crew = test.fleet().insert_crew("Olena", "Shevchenko").await?;
        test.booking().assign_crew(journey.id, crew.id).await?;
        let order = test.booking().insert_order(user.id).await?;
        test.booking().insert_ticket(journey.id, order.id, 3, 4).await?;
        login_as(&test, user.id).await;

        let resp = get_journey(
            State(test.into_app_state()),
            test.session.clone(),
            Path(journey.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let detail: JourneyDetailDto = body_json(resp).await;
        assert_eq!(detail.train.id, train.id);
        assert_eq!(detail.available_seats, 11);
        assert_eq!(detail.crew.len(), 1);
        assert_eq!(detail.crew[0].full_name, "Olena Shevchenko");

        Ok(())
    }

    /// Expect 404 for a journey that does not exist
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        login_as(&test, user.id).await;

        let resp = get_journey(State(test.into_app_state()), test.session.clone(), Path(1))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_journey {
    use super::*;

    /// Expect 201 with deduplicated crew IDs
    #[tokio::test]
    async fn creates_journey_with_crew() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        let (route, _, _) = test.network().insert_mock_route().await?;
        let (train, _) = test.fleet().insert_mock_train(2, 10).await?;
        let crew = test.fleet().insert_mock_crew().await?;
        login_as(&test, staff.id).await;

        let departure = departure_time();
        let resp = create_journey(
            State(test.into_app_state()),
            test.session.clone(),
            Json(JourneyPayload {
                route: route.id,
                train: train.id,
                departure_time: departure,
                arrival_time: departure + Duration::hours(27),
                crew: vec![crew.id, crew.id],
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let dto: JourneyDto = body_json(resp).await;
        assert_eq!(dto.crew, vec![crew.id]);
        assert_eq!(dto.travel_duration, "1 days, 3 hours");

        Ok(())
    }

    /// Expect 400 when arrival is not after departure
    #[tokio::test]
    async fn rejects_arrival_before_departure() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        let (route, _, _) = test.network().insert_mock_route().await?;
        let (train, _) = test.fleet().insert_mock_train(2, 10).await?;
        login_as(&test, staff.id).await;

        let departure = departure_time();
        let resp = create_journey(
            State(test.into_app_state()),
            test.session.clone(),
            Json(JourneyPayload {
                route: route.id,
                train: train.id,
                departure_time: departure,
                arrival_time: departure - Duration::hours(1),
                crew: Vec::new(),
            }),
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

        let departure = departure_time();
        let resp = create_journey(
            State(test.into_app_state()),
            test.session.clone(),
            Json(JourneyPayload {
                route: 1,
                train: 1,
                departure_time: departure,
                arrival_time: departure + Duration::hours(1),
                crew: Vec::new(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod delete_journey {
    use super::*;

    /// Expect 204 and the journey's tickets to be removed with it
    #[tokio::test]
    async fn deletes_journey_and_tickets() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        let (journey, _) = test.booking().insert_mock_journey(1, 5).await?;
        let order = test.booking().insert_order(staff.id).await?;
        let ticket = test.booking().insert_ticket(journey.id, order.id, 1, 1).await?;
        login_as(&test, staff.id).await;

        let resp = delete_journey(
            State(test.into_app_state()),
            test.session.clone(),
            Path(journey.id),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let remaining = entity::prelude::Ticket::find_by_id(ticket.id)
            .one(&test.db)
            .await?;
        assert!(remaining.is_none());

        Ok(())
    }
}
