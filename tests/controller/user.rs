use axum::{extract::State, http::StatusCode, response::IntoResponse};
use railbook::{
    model::user::{LoginPayload, RegisterPayload, UpdateUserPayload, UserDto},
    server::{
        controller::user::{get_me, login, logout, register, update_me},
        model::session::user::SessionUserId,
    },
};
use railbook::server::controller::util::extract::Json;

use super::*;

fn register_payload(email: &str, password: &str) -> RegisterPayload {
    RegisterPayload {
        email: email.to_string(),
        password: password.to_string(),
        first_name: "Taras".to_string(),
        last_name: "Bondar".to_string(),
    }
}

mod register {
    use super::*;

    /// Expect 201 with a regular, non staff account
    #[tokio::test]
    async fn registers_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;

        let resp = register(
            State(test.into_app_state()),
            Json(register_payload("Taras@Example.com", "secret1")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let user: UserDto = body_json(resp).await;
        assert_eq!(user.email, "taras@example.com");
        assert!(!user.is_staff);

        Ok(())
    }

    /// Expect 400 for a password shorter than five characters
    #[tokio::test]
    async fn rejects_short_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;

        let resp = register(
            State(test.into_app_state()),
            Json(register_payload("taras@example.com", "abcd")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 409 when the email is already registered
    #[tokio::test]
    async fn conflicts_on_taken_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_booking_tables()
            .with_user("taras@example.com", false)
            .build()
            .await?;

        let resp = register(
            State(test.into_app_state()),
            Json(register_payload("taras@example.com", "secret1")),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}

mod login {
    use super::*;

    /// Expect the user ID to be stored in the session after a successful login
    #[tokio::test]
    async fn stores_user_in_session() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;
        let resp = register(
            State(test.into_app_state()),
            Json(register_payload("taras@example.com", "secret1")),
        )
        .await
        .into_response();
        let registered: UserDto = body_json(resp).await;

        let resp = login(
            State(test.into_app_state()),
            test.session.clone(),
            Json(LoginPayload {
                email: "taras@example.com".to_string(),
                password: "secret1".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let user_id = SessionUserId::get(&test.session)
            .await
            .expect("read session");
        assert_eq!(user_id, Some(registered.id));

        Ok(())
    }

    /// Expect 400 for a wrong password and an empty session
    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;
        register(
            State(test.into_app_state()),
            Json(register_payload("taras@example.com", "secret1")),
        )
        .await
        .into_response();

        let resp = login(
            State(test.into_app_state()),
            test.session.clone(),
            Json(LoginPayload {
                email: "taras@example.com".to_string(),
                password: "secret2".to_string(),
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let user_id = SessionUserId::get(&test.session)
            .await
            .expect("read session");
        assert!(user_id.is_none());

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect 204 and the session to no longer hold the user
    #[tokio::test]
    async fn clears_session() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        login_as(&test, user.id).await;

        let resp = logout(test.session.clone()).await.into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let user_id = SessionUserId::get(&test.session)
            .await
            .expect("read session");
        assert!(user_id.is_none());

        Ok(())
    }
}

mod get_me {
    use super::*;

    /// Expect 401 when nobody is logged in
    #[tokio::test]
    async fn requires_login() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;

        let resp = get_me(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 401 and a cleared session when the session's user was deleted
    #[tokio::test]
    async fn rejects_missing_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_booking_tables().build().await?;
        login_as(&test, 42).await;

        let resp = get_me(State(test.into_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let user_id = SessionUserId::get(&test.session)
            .await
            .expect("read session");
        assert!(user_id.is_none());

        Ok(())
    }
}

mod update_me {
    use super::*;

    /// Expect names to change while omitted fields keep their value
    #[tokio::test]
    async fn updates_names() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_booking_tables().build().await?;
        let user = test.user().insert_mock_user().await?;
        login_as(&test, user.id).await;

        let resp = update_me(
            State(test.into_app_state()),
            test.session.clone(),
            Json(UpdateUserPayload {
                first_name: Some("Lesia".to_string()),
                ..Default::default()
            }),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let updated: UserDto = body_json(resp).await;
        assert_eq!(updated.first_name, "Lesia");
        assert_eq!(updated.last_name, user.last_name);

        Ok(())
    }
}
