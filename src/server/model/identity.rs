use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::model::app::AppState;

/// ID of the user a request acts on behalf of.
///
/// Read from the request extensions when an outer layer inserted one, otherwise the
/// configured [`AppState::current_user_id`] is used. No authentication happens here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .unwrap_or(CurrentUser(state.current_user_id)))
    }
}
