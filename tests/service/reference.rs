//! Tests for ReferenceService.

use holonet::server::{
    error::{lookup::LookupError, Error},
    service::reference::ReferenceService,
};
use holonet_test_utils::prelude::*;

/// Expect the person mapped to its transport record
#[tokio::test]
async fn get_person_returns_dto() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_person("Luke Skywalker")
        .build()
        .await?;

    let person = ReferenceService::new(&test.db).get_person(1).await.unwrap();

    assert_eq!(person.id, 1);
    assert_eq!(person.name, "Luke Skywalker");

    Ok(())
}

/// Expect PersonNotFound for a nonexistent ID
#[tokio::test]
async fn get_person_fails_for_nonexistent_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    let result = ReferenceService::new(&test.db).get_person(4).await;

    assert!(matches!(
        result,
        Err(Error::LookupError(LookupError::PersonNotFound(4)))
    ));

    Ok(())
}

/// Expect PlanetNotFound for a nonexistent ID
#[tokio::test]
async fn get_planet_fails_for_nonexistent_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let result = ReferenceService::new(&test.db).get_planet(2).await;

    assert!(matches!(
        result,
        Err(Error::LookupError(LookupError::PlanetNotFound(2)))
    ));

    Ok(())
}

/// Expect every planet in insertion order
#[tokio::test]
async fn get_all_planets_returns_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_planet("Kamino")
        .with_mock_planet("Geonosis")
        .build()
        .await?;

    let planets = ReferenceService::new(&test.db).get_all_planets().await.unwrap();

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(planets[0].name, "Kamino");

    Ok(())
}
