use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::FavoriteTarget;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite row
    ///
    /// Duplicates are allowed. Fails with a foreign key violation if the user or
    /// referenced person/planet does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        people_id: Option<i32>,
        planet_id: Option<i32>,
    ) -> Result<entity::favorite::Model, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            people_id: ActiveValue::Set(people_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Finds the oldest favorite of `user_id` pointing at `target_id`
    pub async fn find_for_user(
        &self,
        user_id: i32,
        target: FavoriteTarget,
        target_id: i32,
    ) -> Result<Option<entity::favorite::Model>, DbErr> {
        let target_column = match target {
            FavoriteTarget::Person => entity::favorite::Column::PeopleId,
            FavoriteTarget::Planet => entity::favorite::Column::PlanetId,
        };

        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_column.eq(target_id))
            .order_by_asc(entity::favorite::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets every favorite of a user in insertion order
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite::Model>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite by ID
    ///
    /// Returns OK regardless of the favorite existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
