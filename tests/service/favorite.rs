//! Tests for FavoriteService.

use holonet::server::{
    error::{favorite::FavoriteError, Error},
    model::favorite::FavoriteTarget,
    service::favorite::FavoriteService,
};
use holonet_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Expect adding then removing a favorite to leave the collection size unchanged
#[tokio::test]
async fn add_then_remove_restores_collection() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .with_mock_planet("Tatooine")
        .with_mock_planet("Bespin")
        .with_favorite_planet(1, 1)
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);
    let before = entity::prelude::Favorite::find().count(&test.db).await?;

    let added = favorite_service.add_planet(TEST_USER_ID, 2).await.unwrap();
    assert_eq!(added.planet_id, Some(2));
    favorite_service.remove_planet(TEST_USER_ID, 2).await.unwrap();

    let after = entity::prelude::Favorite::find().count(&test.db).await?;
    assert_eq!(before, after);

    Ok(())
}

/// Expect AddFailed naming the target when the store rejects the insert
#[tokio::test]
async fn add_fails_for_missing_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = FavoriteService::new(&test.db)
        .add(TEST_USER_ID, FavoriteTarget::Person, 10)
        .await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::AddFailed {
            target: FavoriteTarget::Person,
            ..
        }))
    ));

    Ok(())
}

/// Expect NotFound and an untouched store when removing a favorite never added
#[tokio::test]
async fn remove_fails_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .with_mock_planet("Tatooine")
        .with_favorite_planet(2, 1)
        .build()
        .await?;

    let result = FavoriteService::new(&test.db)
        .remove_planet(TEST_USER_ID, 1)
        .await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::NotFound(
            FavoriteTarget::Planet,
            1
        )))
    ));
    assert_eq!(entity::prelude::Favorite::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect the second of two removals of the same favorite to report NotFound
#[tokio::test]
async fn remove_twice_reports_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .with_mock_person("Luke Skywalker")
        .with_favorite_person(1, 1)
        .build()
        .await?;
    let favorite_service = FavoriteService::new(&test.db);

    let first = favorite_service.remove_person(TEST_USER_ID, 1).await;
    let second = favorite_service.remove_person(TEST_USER_ID, 1).await;

    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(Error::FavoriteError(FavoriteError::NotFound(
            FavoriteTarget::Person,
            1
        )))
    ));
    assert_eq!(entity::prelude::Favorite::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect a database error when the favorite table is missing during lookup
#[tokio::test]
async fn remove_fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = FavoriteService::new(&test.db)
        .remove_person(TEST_USER_ID, 1)
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}

/// Expect NoFavorites rather than an empty list
#[tokio::test]
async fn list_fails_when_user_has_no_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = FavoriteService::new(&test.db).list(TEST_USER_ID).await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(FavoriteError::NoFavorites))
    ));

    Ok(())
}

/// Expect favorites of both kinds in insertion order
#[tokio::test]
async fn list_returns_favorites_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .with_mock_person("Luke Skywalker")
        .with_mock_planet("Tatooine")
        .with_favorite_person(1, 1)
        .with_favorite_planet(1, 1)
        .build()
        .await?;

    let favorites = FavoriteService::new(&test.db)
        .list(TEST_USER_ID)
        .await
        .unwrap();

    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].people_id, Some(1));
    assert_eq!(favorites[1].planet_id, Some(1));

    Ok(())
}

/// Expect a favorite with neither target set to be listed as stored
#[tokio::test]
async fn list_keeps_favorites_without_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tables()
        .with_mock_user(1)
        .build()
        .await?;
    test.favorite().insert_favorite(TEST_USER_ID, None, None).await?;

    let favorites = FavoriteService::new(&test.db)
        .list(TEST_USER_ID)
        .await
        .unwrap();

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].people_id, None);
    assert_eq!(favorites[0].planet_id, None);

    Ok(())
}
