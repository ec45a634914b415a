use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::Error,
        model::{app::AppState, identity::CurrentUser},
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageDto),
        (status = 400, description = "Favorite could not be stored", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .add_planet(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Planet added to favorites")),
    ))
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 400, description = "Favorite could not be removed", body = ErrorDto),
        (status = 404, description = "Favorite planet not found", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_planet(user_id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planet removed from favorites")),
    ))
}

/// Add a person to the current user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 201, description = "Person added to favorites", body = MessageDto),
        (status = 400, description = "Favorite could not be stored", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .add_person(user_id, people_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Person added to favorites")),
    ))
}

/// Remove a person from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageDto),
        (status = 400, description = "Favorite could not be removed", body = ErrorDto),
        (status = 404, description = "Favorite person not found", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_person(user_id, people_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Person removed from favorites")),
    ))
}
