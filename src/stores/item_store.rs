use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
    Set,
};

use crate::errors::InternalError;
use crate::types::db::item::{self, Entity as Item};

/// Validated fields for a new item row
///
/// Produced by the item validator; `available` already carries its default.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
}

/// Validated subset of fields for a partial update
///
/// A `None` field was absent from the request and keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

/// ItemStore is the persistence gateway for item rows
///
/// Each method is one logical operation against the database; atomicity
/// per call is delegated to the storage engine.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new item row
    ///
    /// The storage engine assigns the id; both timestamps are stamped with
    /// the insertion time.
    ///
    /// # Returns
    /// * `Ok(Model)` - The full stored record, id and timestamps included
    /// * `Err(InternalError)` - Database error
    pub async fn insert(&self, new_item: NewItem) -> Result<item::Model, InternalError> {
        let now = Utc::now().timestamp();
        let model = item::ActiveModel {
            name: Set(new_item.name),
            description: Set(new_item.description),
            price: Set(new_item.price),
            available: Set(new_item.available),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))
    }

    /// Fetch an item row by id
    ///
    /// # Returns
    /// * `Ok(Some(Model))` - The item exists
    /// * `Ok(None)` - No row with this id
    /// * `Err(InternalError)` - Database error
    pub async fn find_by_id(&self, item_id: i32) -> Result<Option<item::Model>, InternalError> {
        Item::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item_by_id", e))
    }

    /// Apply a partial update to an existing item row
    ///
    /// Only fields present in the patch are written; `updated_at` is
    /// refreshed on every call, an empty patch included.
    ///
    /// # Returns
    /// * `Ok(Model)` - The refreshed record
    /// * `Err(InternalError)` - Database error
    pub async fn update(
        &self,
        existing: item::Model,
        patch: ItemPatch,
    ) -> Result<item::Model, InternalError> {
        let mut active: item::ActiveModel = existing.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(price) = patch.price {
            active.price = Set(price);
        }
        if let Some(available) = patch.available {
            active.available = Set(available);
        }
        active.updated_at = Set(Utc::now().timestamp());

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_item", e))
    }

    /// Delete an item row by id
    ///
    /// Hard delete; callers confirm existence first to report not-found.
    pub async fn delete(&self, item_id: i32) -> Result<(), InternalError> {
        Item::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(())
    }

    /// Count all item rows
    pub async fn count(&self) -> Result<u64, InternalError> {
        Item::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }

    /// Fetch a page of item rows ordered by id ascending
    pub async fn find_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_asc(item::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item_page", e))
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
