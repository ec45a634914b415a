//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here together with their utoipa specifications. The
//! collected OpenAPI document is served at `/api/docs/openapi.json` and browsable through
//! Swagger UI at `/api/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with every API endpoint and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /user` - Greeting
/// - `GET /users` - List users
/// - `GET /users/favorites` - Current user's favorites
/// - `GET /users/{id}/favorites` - A user with their favorites
/// - `GET /people`, `GET /people/{id}`, `GET /people/population`
/// - `GET /planets`, `GET /planets/{id}`, `GET /planets/populate`
/// - `POST`/`DELETE /favorite/planet/{id}`
/// - `POST`/`DELETE /favorite/people/{id}`
///
/// Static segments such as `/people/population` take priority over `{id}` captures.
/// Every response passes through a permissive CORS layer and request tracing.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, catalog, current_user_id });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::people::PEOPLE_TAG, description = "Catalog people"),
        (name = controller::planet::PLANET_TAG, description = "Catalog planets"),
        (name = controller::user::USER_TAG, description = "Users and their favorites"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::hello))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::user::get_user_with_favorites))
        .routes(routes!(controller::people::get_all_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::people::populate_people))
        .routes(routes!(controller::planet::get_all_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::planet::populate_planets))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
