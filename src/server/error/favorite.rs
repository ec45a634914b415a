use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, model::favorite::FavoriteTarget};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User has no favorite {0} with ID {1}")]
    NotFound(FavoriteTarget, i32),
    #[error("User has no favorites")]
    NoFavorites,
    #[error("Failed to add favorite {target}: {source}")]
    AddFailed {
        target: FavoriteTarget,
        #[source]
        source: sea_orm::DbErr,
    },
    #[error("Failed to remove favorite {target}: {source}")]
    RemoveFailed {
        target: FavoriteTarget,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(target, _) => {
                tracing::debug!("Favorite error: {}", self);

                error_response(
                    StatusCode::NOT_FOUND,
                    format!("Favorite {} not found", target),
                )
            }
            Self::NoFavorites => error_response(StatusCode::NOT_FOUND, "No favorites found"),
            Self::AddFailed { target, .. } => {
                tracing::error!("{}", self);

                error_response(StatusCode::BAD_REQUEST, format!("Error adding {}", target))
            }
            Self::RemoveFailed { target, .. } => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Error removing {}", target),
                )
            }
        }
    }
}
