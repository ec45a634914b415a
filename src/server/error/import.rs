use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum ImportError {
    /// A list or detail request to the catalog failed: connection, timeout, non-2xx
    /// status or an undecodable body. Nothing has been written when this occurs.
    #[error("Failed to fetch from catalog: {0}")]
    Fetch(#[from] reqwest::Error),
    /// The store rejected the staged page, the whole page was rolled back.
    #[error("Failed to commit imported {resource}: {source}")]
    Commit {
        resource: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        match self {
            Self::Fetch(_) => InternalServerError(self).into_response(),
            Self::Commit { resource, .. } => {
                tracing::error!("{}", self);

                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error populating {}", resource),
                )
            }
        }
    }
}
