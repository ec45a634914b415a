//! Helpers shared by the integration tests.

use std::time::Duration;

use axum::{body::to_bytes, response::Response};
use holonet::server::{catalog::CatalogClient, model::app::AppState};
use holonet_test_utils::{constant::TEST_USER_ID, TestContext};
use serde_json::Value;

/// Extension trait for TestContext to create an AppState pointing at the mock catalog
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let catalog = CatalogClient::new(self.catalog_url(), Duration::from_secs(5))
            .expect("Failed to build catalog client");

        AppState {
            db: self.db.clone(),
            catalog,
            current_user_id: TEST_USER_ID,
        }
    }
}

/// Read a response body as JSON
pub async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
