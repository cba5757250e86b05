// Common test utilities for integration tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use catalog_backend::app_data::AppData;
use catalog_backend::services::ItemService;
use catalog_backend::stores::ItemStore;

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

/// Creates an item store backed by an in-memory database
pub async fn setup_test_store() -> Arc<ItemStore> {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));

    app_data.item_store.clone()
}

/// Creates an item service backed by an in-memory database
pub async fn setup_test_service() -> ItemService {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));

    ItemService::new(app_data)
}
