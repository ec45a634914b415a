use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        people::PersonDto,
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{import::ImportService, reference::ReferenceService},
    },
};

pub static PEOPLE_TAG: &str = "people";

/// List every person
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "All people in insertion order", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = ReferenceService::new(&state.db).get_all_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "The requested person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = ReferenceService::new(&state.db)
        .get_person(people_id)
        .await?;

    Ok((StatusCode::OK, Json(person)))
}

/// Import the first page of people from the reference catalog
///
/// Rows are appended, running it twice duplicates every person.
#[utoipa::path(
    get,
    path = "/people/population",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "People imported", body = MessageDto),
        (status = 500, description = "Catalog request or commit failed", body = ErrorDto)
    ),
)]
pub async fn populate_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    ImportService::new(&state.db, &state.catalog)
        .import_people()
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("People populated successfully")),
    ))
}
