use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::PlanetDto,
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{import::ImportService, reference::ReferenceService},
    },
};

pub static PLANET_TAG: &str = "planet";

/// List every planet
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets in insertion order", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = ReferenceService::new(&state.db).get_all_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The requested planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = ReferenceService::new(&state.db)
        .get_planet(planet_id)
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Import the first page of planets from the reference catalog
#[utoipa::path(
    get,
    path = "/planets/populate",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Planets imported", body = MessageDto),
        (status = 500, description = "Catalog request or commit failed", body = ErrorDto)
    ),
)]
pub async fn populate_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    ImportService::new(&state.db, &state.catalog)
        .import_planets()
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planets populated successfully")),
    ))
}
