use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::controller::people::{get_all_people, get_person, populate_people};
use serde_json::json;

use super::*;

/// Expect 200 with an empty list when no people exist
#[tokio::test]
async fn get_all_people_returns_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_all_people(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect 200 with every person in insertion order
#[tokio::test]
async fn get_all_people_returns_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_person("Luke Skywalker")
        .with_mock_person("Han Solo")
        .build()
        .await?;

    let resp = get_all_people(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body[0]["name"], "Luke Skywalker");
    assert_eq!(body[1]["name"], "Han Solo");
    assert_eq!(body[1]["id"], 2);

    Ok(())
}

/// Expect 200 with the requested person, its id matching the path
#[tokio::test]
async fn get_person_returns_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_person("Luke Skywalker")
        .build()
        .await?;

    let resp = get_person(State(test.into_app_state()), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["birth_year"], "19BBY");
    assert!(body.get("created_at").is_some());

    Ok(())
}

/// Expect 404 with "Person not found" for a nonexistent ID
#[tokio::test]
async fn get_person_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let resp = get_person(State(test.into_app_state()), Path(99))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Person not found" }));

    Ok(())
}

/// Expect 500 when the people table is missing
#[tokio::test]
async fn get_all_people_returns_error_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_all_people(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Internal server error" })
    );

    Ok(())
}

/// Expect 200 with a success message after importing from the catalog
#[tokio::test]
async fn populate_people_imports_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_catalog_resource(
            "people",
            300,
            vec![
                factory::mock_person_properties("Luke Skywalker"),
                factory::mock_person_properties("C-3PO"),
            ],
            1,
        )
        .build()
        .await?;

    let resp = populate_people(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "People populated successfully" })
    );
    test.assert_mocks();

    Ok(())
}

/// Expect 500 "Error populating people" when the store rejects an imported row
#[tokio::test]
async fn populate_people_reports_commit_failure() -> Result<(), TestError> {
    let mut incomplete = factory::mock_person_properties("R2-D2");
    incomplete.as_object_mut().unwrap().remove("gender");

    let test = TestBuilder::new()
        .with_tables()
        .with_catalog_resource("people", 300, vec![incomplete], 1)
        .build()
        .await?;

    let resp = populate_people(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Error populating people" })
    );
    test.assert_mocks();

    Ok(())
}
