//! Constant values shared across tests.

/// ID assigned to the first user inserted into a fresh test database.
///
/// Matches the default fallback identity used by the server when no
/// authentication layer supplies one.
pub const TEST_USER_ID: i32 = 1;

/// Password stored for mock users. Never expected to appear in any response.
pub static TEST_USER_PASSWORD: &str = "hunter2";

/// Page the catalog list endpoints are requested with.
pub static CATALOG_PAGE: &str = "1";
