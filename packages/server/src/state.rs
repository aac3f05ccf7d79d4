use sea_orm::DatabaseConnection;

use crate::catalog::CatalogClient;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: CatalogClient,
    pub config: AppConfig,
}
