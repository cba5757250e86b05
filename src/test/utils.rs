use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::services::ItemService;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates an item service backed by an in-memory database
pub async fn setup_test_service() -> ItemService {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));

    ItemService::new(app_data)
}
