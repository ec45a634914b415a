use sea_orm::DatabaseConnection;

use crate::server::catalog::CatalogClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: CatalogClient,
    /// Identity used when no authentication layer attached a [`CurrentUser`](super::identity::CurrentUser)
    pub current_user_id: i32,
}
