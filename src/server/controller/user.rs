use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteDto,
        user::{UserDto, UserFavoritesDto},
    },
    server::{
        error::Error,
        model::{app::AppState, identity::CurrentUser},
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Greeting kept for clients probing the API
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Greeting message", body = MessageDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto::new("Hello, this is your GET /user response ")),
    )
}

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users ordered by ID", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List the current user's favorites
///
/// Responds 404 rather than an empty list when the user has no favorites.
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Favorites of the current user", body = Vec<FavoriteDto>),
        (status = 404, description = "No favorites found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).list(user_id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Get a user together with their favorites
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with favorites, possibly none", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_with_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .get_with_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
