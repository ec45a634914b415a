use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
///
/// Errors are keyed `error`, including the favorite endpoints that used `msg` in the legacy API.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for requests that only report an outcome
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human-readable status message
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
