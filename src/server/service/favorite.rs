use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::favorite::FavoriteRepository,
        error::{favorite::FavoriteError, Error},
        model::favorite::FavoriteTarget,
    },
};

/// Service managing the favorites of a user.
///
/// Writes run in their own transaction, a failed insert or delete is rolled back and
/// reported as a rejected write rather than a server error.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a favorite pointing at a person or planet
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite, duplicates are allowed
    /// - `Err(Error::FavoriteError(FavoriteError::AddFailed))` - The store rejected the
    ///   insert, e.g. the user or target does not exist
    pub async fn add(
        &self,
        user_id: i32,
        target: FavoriteTarget,
        target_id: i32,
    ) -> Result<FavoriteDto, Error> {
        let (people_id, planet_id) = target.columns(target_id);

        let favorite = async {
            let txn = self.db.begin().await?;
            let favorite = FavoriteRepository::new(&txn)
                .create(user_id, people_id, planet_id)
                .await?;
            txn.commit().await?;

            Ok::<_, DbErr>(favorite)
        }
        .await
        .map_err(|source| FavoriteError::AddFailed { target, source })?;

        Ok(favorite.into())
    }

    /// Removes the oldest favorite of `user_id` pointing at the target
    ///
    /// Lookup and delete share one transaction. A row deleted concurrently between the two
    /// still yields `NotFound`.
    ///
    /// # Returns
    /// - `Ok(())` - One favorite was deleted
    /// - `Err(Error::FavoriteError(FavoriteError::NotFound))` - The user has no such favorite
    /// - `Err(Error::FavoriteError(FavoriteError::RemoveFailed))` - The store rejected the delete
    /// - `Err(Error::DbErr)` - The lookup itself failed
    pub async fn remove(
        &self,
        user_id: i32,
        target: FavoriteTarget,
        target_id: i32,
    ) -> Result<(), Error> {
        let remove_failed = |source: DbErr| FavoriteError::RemoveFailed { target, source };

        let txn = self.db.begin().await.map_err(remove_failed)?;
        let favorite_repo = FavoriteRepository::new(&txn);

        let favorite = favorite_repo
            .find_for_user(user_id, target, target_id)
            .await?
            .ok_or(FavoriteError::NotFound(target, target_id))?;

        let result = favorite_repo
            .delete(favorite.id)
            .await
            .map_err(remove_failed)?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::NotFound(target, target_id).into());
        }

        txn.commit().await.map_err(remove_failed)?;

        Ok(())
    }

    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<FavoriteDto, Error> {
        self.add(user_id, FavoriteTarget::Planet, planet_id).await
    }

    pub async fn add_person(&self, user_id: i32, people_id: i32) -> Result<FavoriteDto, Error> {
        self.add(user_id, FavoriteTarget::Person, people_id).await
    }

    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        self.remove(user_id, FavoriteTarget::Planet, planet_id).await
    }

    pub async fn remove_person(&self, user_id: i32, people_id: i32) -> Result<(), Error> {
        self.remove(user_id, FavoriteTarget::Person, people_id).await
    }

    /// Lists every favorite of a user in insertion order
    ///
    /// An empty list is reported as [`FavoriteError::NoFavorites`] rather than `Ok(vec![])`.
    pub async fn list(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        if favorites.is_empty() {
            return Err(FavoriteError::NoFavorites.into());
        }

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }
}
