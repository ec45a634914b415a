use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::{
    controller::user::{get_all_users, get_user_favorites, get_user_with_favorites, hello},
    model::identity::CurrentUser,
};
use serde_json::json;

use super::*;

/// Expect the fixed greeting message
#[tokio::test]
async fn hello_returns_greeting() {
    let resp = hello().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Hello, this is your GET /user response " })
    );
}

/// Expect users without their password
#[tokio::test]
async fn get_all_users_omits_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .build()
        .await?;

    let resp = get_all_users(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(
        body[0],
        json!({ "id": 1, "email": "user1@holonet.test", "fullname": "Test User 1" })
    );
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 404 "No favorites found" instead of an empty list
#[tokio::test]
async fn get_user_favorites_returns_not_found_when_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let resp = get_user_favorites(State(test.into_app_state()), CurrentUser(TEST_USER_ID))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "No favorites found" }));

    Ok(())
}

/// Expect only the current user's favorites
#[tokio::test]
async fn get_user_favorites_returns_current_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .with_mock_planet("Tatooine")
        .with_mock_person("Luke Skywalker")
        .with_favorite_planet(1, 1)
        .with_favorite_person(2, 1)
        .build()
        .await?;

    let resp = get_user_favorites(State(test.into_app_state()), CurrentUser(2))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!([{ "user_id": 2, "planet_id": null, "people_id": 1 }])
    );

    Ok(())
}

/// Expect the user with an empty favorites list rather than 404
#[tokio::test]
async fn get_user_with_favorites_allows_empty_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let resp = get_user_with_favorites(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["fullname"], "Test User 1");
    assert_eq!(body["favorites"], json!([]));
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 404 "User not found" for a nonexistent user
#[tokio::test]
async fn get_user_with_favorites_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_user_with_favorites(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "User not found" }));

    Ok(())
}
