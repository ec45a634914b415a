//! HTTP controller endpoints for the holonet API.
//!
//! Axum handlers for reading people & planets, triggering catalog imports, listing
//! users and managing favorites. Handlers delegate to the service layer and return
//! `Result<impl IntoResponse, Error>`, error mapping happens in [`crate::server::error`].
//! Each handler carries a utoipa annotation for the OpenAPI document.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
