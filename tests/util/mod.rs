//! Helpers shared by the integration tests.

use axum::{body::to_bytes, response::Response};
use railbook::server::model::{app::AppState, session::user::SessionUserId};
use railbook_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to build the server's AppState
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Stores the user ID in the test session as a successful login would
pub async fn login_as(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id)
        .await
        .expect("insert user into test session");
}

/// Reads a response body as JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read response body");

    serde_json::from_slice(&bytes).expect("deserialize response body")
}
