use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Person ID {0} not found")]
    PersonNotFound(i32),
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        tracing::debug!("Lookup error: {}", self);

        let message = match self {
            Self::PersonNotFound(_) => "Person not found",
            Self::PlanetNotFound(_) => "Planet not found",
            Self::UserNotFound(_) => "User not found",
        };

        error_response(StatusCode::NOT_FOUND, message)
    }
}
