use serde::{Deserialize, Serialize};

use crate::model::favorite::FavoriteDto;

/// Public view of a user, the password is never part of it
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub fullname: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            fullname: user.fullname,
        }
    }
}

/// A user together with everything they have favorited
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub id: i32,
    pub fullname: String,
    pub email: String,
    pub favorites: Vec<FavoriteDto>,
}

impl From<(entity::user::Model, Vec<entity::favorite::Model>)> for UserFavoritesDto {
    fn from((user, favorites): (entity::user::Model, Vec<entity::favorite::Model>)) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname,
            email: user.email,
            favorites: favorites.into_iter().map(FavoriteDto::from).collect(),
        }
    }
}
