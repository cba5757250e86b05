use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::ItemApiError;
use crate::services::ItemValidator;
use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::dto::items::{CreateItemRequest, UpdateItemRequest};

/// A page of items with its pagination metadata
#[derive(Debug)]
pub struct ItemPage {
    pub items: Vec<item::Model>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

/// Item service that orchestrates validation and persistence
///
/// One method per use case: validate the payload, call the store, map
/// lookup misses and rule violations to API errors. Errors are detected
/// at the boundary and surfaced immediately; an update either applies
/// its whole validated set or nothing.
pub struct ItemService {
    item_store: Arc<ItemStore>,
    validator: ItemValidator,
}

impl ItemService {
    /// Create ItemService from AppData
    ///
    /// Extracts the store handle from the centralized AppData so test
    /// instances can run against their own database.
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_store: app_data.item_store.clone(),
            validator: ItemValidator::new(),
        }
    }

    /// Create a new item
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record with assigned id and timestamps
    /// * `Err(ItemApiError)` - Missing required field (400), field rule
    ///   violation (422), or database error (500)
    pub async fn create_item(
        &self,
        request: &CreateItemRequest,
    ) -> Result<item::Model, ItemApiError> {
        let new_item = self
            .validator
            .validate_create(request)
            .map_err(ItemApiError::from_validation_error)?;

        let item = self
            .item_store
            .insert(new_item)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        tracing::debug!("Created {}", item);
        Ok(item)
    }

    /// Fetch a single item by id
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record
    /// * `Err(ItemApiError)` - Not found (404) or database error (500)
    pub async fn get_item(&self, item_id: i32) -> Result<item::Model, ItemApiError> {
        self.item_store
            .find_by_id(item_id)
            .await
            .map_err(ItemApiError::from_internal_error)?
            .ok_or_else(|| ItemApiError::not_found(item_id))
    }

    /// Fetch a page of items with pagination metadata
    ///
    /// Non-positive page or size values are clamped to 1. The page count
    /// is computed with integer arithmetic and is 0 when the table is
    /// empty.
    pub async fn list_items(&self, page: u64, size: u64) -> Result<ItemPage, ItemApiError> {
        let page = page.max(1);
        let size = size.max(1);

        let total = self
            .item_store
            .count()
            .await
            .map_err(ItemApiError::from_internal_error)?;

        let pages = if total == 0 { 0 } else { (total + size - 1) / size };
        let offset = (page - 1) * size;

        let items = self
            .item_store
            .find_page(offset, size)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        Ok(ItemPage {
            items,
            total,
            page,
            pages,
        })
    }

    /// Apply a partial update to an existing item
    ///
    /// Fields present in the payload overwrite the stored values; absent
    /// fields are untouched. `updated_at` refreshes on every call, an
    /// empty payload included.
    ///
    /// # Returns
    /// * `Ok(Model)` - The refreshed record
    /// * `Err(ItemApiError)` - Not found (404), field rule violation
    ///   (422), or database error (500)
    pub async fn update_item(
        &self,
        item_id: i32,
        request: &UpdateItemRequest,
    ) -> Result<item::Model, ItemApiError> {
        let existing = self.get_item(item_id).await?;

        let patch = self
            .validator
            .validate_update(request)
            .map_err(ItemApiError::from_validation_error)?;

        let updated = self
            .item_store
            .update(existing, patch)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        tracing::debug!("Updated {}", updated);
        Ok(updated)
    }

    /// Delete an item by id
    ///
    /// Existence is confirmed first so a missing row reports not-found.
    ///
    /// # Returns
    /// * `Ok(())` - Row removed
    /// * `Err(ItemApiError)` - Not found (404) or database error (500)
    pub async fn delete_item(&self, item_id: i32) -> Result<(), ItemApiError> {
        let existing = self.get_item(item_id).await?;

        self.item_store
            .delete(existing.id)
            .await
            .map_err(ItemApiError::from_internal_error)?;

        tracing::debug!("Deleted item {}", existing.id);
        Ok(())
    }
}
