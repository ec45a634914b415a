use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::controller::planet::{get_all_planets, get_planet, populate_planets};
use serde_json::json;

use super::*;

/// Expect 200 with planets, without a created_at field
#[tokio::test]
async fn get_all_planets_returns_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let resp = get_all_planets(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["terrain"], "desert");
    assert!(body[0].get("created_at").is_none());

    Ok(())
}

/// Expect the returned planet's id to equal the requested one for every stored planet
#[tokio::test]
async fn get_planet_returns_requested_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Alderaan")
        .with_mock_planet("Yavin IV")
        .build()
        .await?;
    let state = test.into_app_state();

    for planet_id in 1..=3 {
        let resp = get_planet(State(state.clone()), Path(planet_id))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["id"], planet_id);
    }

    Ok(())
}

/// Expect 404 with "Planet not found" for a nonexistent ID
#[tokio::test]
async fn get_planet_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let resp = get_planet(State(test.into_app_state()), Path(2))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Planet not found" }));

    Ok(())
}

/// Expect 200 with a success message after importing from the catalog
#[tokio::test]
async fn populate_planets_imports_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_catalog_resource(
            "planets",
            60,
            vec![factory::mock_planet_properties("Tatooine")],
            1,
        )
        .build()
        .await?;

    let resp = populate_planets(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Planets populated successfully" })
    );
    test.assert_mocks();

    Ok(())
}

/// Expect a generic 500 when the catalog fails a detail request
#[tokio::test]
async fn populate_planets_reports_fetch_failure() -> Result<(), TestError> {
    let planets = vec![factory::mock_planet_properties("Tatooine")];

    let mut test = TestBuilder::new().with_tables().build().await?;
    let list = test.catalog().create_list_endpoint("planets", 60, &planets, 1);
    let detail = test
        .catalog()
        .create_failing_detail_endpoint("planets", 1, 502, 1);
    test.track_mock(list);
    test.track_mock(detail);

    let resp = populate_planets(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Internal server error" })
    );
    test.assert_mocks();

    Ok(())
}
