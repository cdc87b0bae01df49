use axum::{extract::State, http::StatusCode, response::IntoResponse};
use railbook::{
    model::train::{TrainDto, TrainListDto, TrainPayload},
    server::controller::train::{create_train, get_train, list_trains, TrainListParams},
};
use railbook::server::controller::util::extract::{Json, Path, Query};

use super::*;

mod list_trains {
    use super::*;

    /// Expect trains to be filtered by case-insensitive name substring
    #[tokio::test]
    async fn filters_by_name() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let train_type = test.fleet().insert_train_type("Intercity").await?;
        test.fleet()
            .insert_train("Dnipro Express", 5, 40, train_type.id)
            .await?;
        test.fleet()
            .insert_train("Carpathian", 3, 30, train_type.id)
            .await?;
        login_as(&test, user.id).await;

        let resp = list_trains(
            State(test.into_app_state()),
            test.session.clone(),
            Query(TrainListParams {
                name: Some("express".to_string()),
                train_types: None,
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let trains: Vec<TrainListDto> = body_json(resp).await;
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].name, "Dnipro Express");
        assert_eq!(trains[0].train_type, "Intercity");
        assert_eq!(trains[0].total_capacity, 200);

        Ok(())
    }

    /// Expect only trains of the listed train types
    #[tokio::test]
    async fn filters_by_train_types() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (first, first_type) = test.fleet().insert_mock_train(2, 10).await?;
        test.fleet().insert_mock_train(2, 10).await?;
        login_as(&test, user.id).await;

        let resp = list_trains(
            State(test.into_app_state()),
            test.session.clone(),
            Query(TrainListParams {
                name: None,
                train_types: Some(first_type.id.to_string()),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let trains: Vec<TrainListDto> = body_json(resp).await;
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].id, first.id);

        Ok(())
    }

    /// Expect 400 when train_types contains something other than IDs
    #[tokio::test]
    async fn rejects_malformed_train_types() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        login_as(&test, user.id).await;

        let resp = list_trains(
            State(test.into_app_state()),
            test.session.clone(),
            Query(TrainListParams {
                name: None,
                train_types: Some("1,abc".to_string()),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod get_train {
    use super::*;

    /// Expect the train type name and total capacity in the detail
    #[tokio::test]
    async fn returns_train() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let (train, train_type) = test.fleet().insert_mock_train(4, 25).await?;
        login_as(&test, user.id).await;

        let resp = get_train(State(test.into_app_state()), test.session.clone(), Path(train.id))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let dto: TrainListDto = body_json(resp).await;
        assert_eq!(dto.train_type, train_type.name);
        assert_eq!(dto.total_capacity, 100);

        Ok(())
    }
}

mod create_train {
    use super::*;

    /// Expect 201 with the train type referenced by ID
    #[tokio::test]
    async fn creates_train() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let staff = test.user().insert_mock_staff().await?;
        let train_type = test.fleet().insert_train_type("Regional").await?;
        login_as(&test, staff.id).await;

        let resp = create_train(
            State(test.into_app_state()),
            test.session.clone(),
            Json(TrainPayload {
                name: "Podillia".to_string(),
                cargo_num: 6,
                places_in_cargo: 54,
                train_type: train_type.id,
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let dto: TrainDto = body_json(resp).await;
        assert_eq!(dto.train_type, train_type.id);
        assert_eq!(dto.total_capacity, 324);

        Ok(())
    }

    /// Expect 403 for a user without staff permissions
    #[tokio::test]
    async fn forbids_regular_user() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        let train_type = test.fleet().insert_train_type("Regional").await?;
        login_as(&test, user.id).await;

        let resp = create_train(
            State(test.into_app_state()),
            test.session.clone(),
            Json(TrainPayload {
                name: "Podillia".to_string(),
                cargo_num: 6,
                places_in_cargo: 54,
                train_type: train_type.id,
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        Ok(())
    }
}
