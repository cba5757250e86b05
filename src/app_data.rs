use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::ItemStore;

/// Centralized application data
///
/// The database connection and the stores built on it are created once in
/// main.rs and shared across API instances. Tests build their own AppData
/// against an in-memory database, so no global connection exists anywhere.
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database should be connected and migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(db.clone()));
        tracing::debug!("Stores created");

        Self { db, item_store }
    }
}
