use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row as-is, both targets may be set or unset
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        people_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::favorite::Model, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                people_id: ActiveValue::Set(people_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_person(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, Some(people_id), None).await
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorite::Model, TestError> {
        self.insert_favorite(user_id, None, Some(planet_id)).await
    }
}
