use sea_orm::DatabaseConnection;

use crate::{
    model::user::{UserDto, UserFavoritesDto},
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{lookup::LookupError, Error},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Gets a user together with all of their favorites
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - The user, `favorites` may be empty
    /// - `Err(Error::LookupError(LookupError::UserNotFound))` - No user with that ID
    pub async fn get_with_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(LookupError::UserNotFound(user_id))?;

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user.id)
            .await?;

        Ok((user, favorites).into())
    }
}
