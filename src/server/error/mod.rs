//! Error types for the holonet server.
//!
//! Domain errors live in their own submodules (configuration, entity lookup, favorites,
//! catalog import) and are aggregated into [`Error`]. Every error implements
//! `IntoResponse`, so handlers can return `Result<_, Error>` and rely on `?`. Store and
//! network failures are logged here and only a generic message reaches the client.

pub mod config;
pub mod favorite;
pub mod import;
pub mod lookup;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, favorite::FavoriteError, import::ImportError, lookup::LookupError,
    },
};

/// Main error type for the holonet server.
///
/// Aggregates the domain-specific errors and external library errors into a single type.
/// `#[from]` conversions allow propagation with `?`; the `IntoResponse` implementation
/// picks the HTTP status for each variant.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A requested person, planet or user does not exist.
    #[error(transparent)]
    LookupError(#[from] LookupError),
    /// Favorite not found, empty favorites or a rejected favorite write.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Catalog import failed while fetching or committing.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error outside of an import (client construction).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// IO error (binding the listener, serving).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - A favorite write was rejected by the store
/// - 404 Not Found - Missing person, planet, user, favorite, or no favorites at all
/// - 500 Internal Server Error - Import failures and everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::LookupError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::ImportError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Build an [`ErrorDto`] response with the provided status & message
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
