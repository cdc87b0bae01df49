use axum::{extract::State, http::StatusCode, response::IntoResponse};
use railbook::{
    model::station::{StationDto, StationPayload},
    server::controller::station::{
        create_station, delete_station, get_station, list_stations, update_station,
    },
};
use railbook::server::controller::util::extract::{Json, Path};

use super::*;

fn payload(name: &str, latitude: f64, longitude: f64) -> StationPayload {
    StationPayload {
        name: name.to_string(),
        latitude,
        longitude,
    }
}

mod list_stations {
    use super::*;

    /// Expect 200 with stations ordered by name for any logged in user
    #[tokio::test]
    async fn returns_stations() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        test.network().insert_station("Lviv", 49.84, 24.03).await?;
        test.network().insert_station("Kyiv", 50.45, 30.52).await?;
        login_as(&test, user.id).await;

        let resp = list_stations(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let stations: Vec<StationDto> = body_json(resp).await;
        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Kyiv", "Lviv"]);

        Ok(())
    }

    /// Expect 401 when no user is in session
    #[tokio::test]
    async fn requires_login() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;

        let resp = list_stations(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod get_station {
    use super::*;

    /// Expect 404 for a station that does not exist
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        login_as(&test, user.id).await;

        let resp = get_station(State(test.into_app_state()), test.session.clone(), Path(1))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_station {
    use super::*;

    /// Expect 201 with the created station for staff
    #[tokio::test]
    async fn creates_station_as_staff() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        login_as(&test, staff.id).await;

        let resp = create_station(
            State(test.into_app_state()),
            test.session.clone(),
            Json(payload("Odesa", 46.48, 30.72)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let station: StationDto = body_json(resp).await;
        assert_eq!(station.name, "Odesa");

        Ok(())
    }

    /// Expect 403 when a regular user attempts to create a station
    #[tokio::test]
    async fn forbids_regular_user() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        login_as(&test, user.id).await;

        let resp = create_station(
            State(test.into_app_state()),
            test.session.clone(),
            Json(payload("Odesa", 46.48, 30.72)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect 409 when the name is already taken
    #[tokio::test]
    async fn conflicts_on_duplicate_name() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        test.network().insert_station("Odesa", 46.48, 30.72).await?;
        login_as(&test, staff.id).await;

        let resp = create_station(
            State(test.into_app_state()),
            test.session.clone(),
            Json(payload("Odesa", 10.0, 10.0)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }

    /// Expect 400 when latitude is outside [-90, 90]
    #[tokio::test]
    async fn rejects_invalid_latitude() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        login_as(&test, staff.id).await;

        let resp = create_station(
            State(test.into_app_state()),
            test.session.clone(),
            Json(payload("Nowhere", 91.0, 0.0)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod update_station {
    use super::*;

    /// Expect 200 with the replaced fields
    #[tokio::test]
    async fn updates_station() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        let station = test.network().insert_station("Kiev", 50.45, 30.52).await?;
        login_as(&test, staff.id).await;

        let resp = update_station(
            State(test.into_app_state()),
            test.session.clone(),
            Path(station.id),
            Json(payload("Kyiv", 50.45, 30.52)),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let updated: StationDto = body_json(resp).await;
        assert_eq!(updated.id, station.id);
        assert_eq!(updated.name, "Kyiv");

        Ok(())
    }
}

mod delete_station {
    use super::*;

    /// Expect 204 and the station to be gone afterwards
    #[tokio::test]
    async fn deletes_station() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        let station = test.network().insert_mock_station().await?;
        login_as(&test, staff.id).await;

        let resp = delete_station(
            State(test.into_app_state()),
            test.session.clone(),
            Path(station.id),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = get_station(
            State(test.into_app_state()),
            test.session.clone(),
            Path(station.id),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
