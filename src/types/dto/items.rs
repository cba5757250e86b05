use chrono::{DateTime, Utc};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::item;

/// Request model for creating a new item
///
/// All fields are optional at the parsing layer; required-field and
/// per-field rules are enforced by the item validator so that a missing
/// field and an invalid field surface as different error kinds.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Name of the item (1-100 characters)
    pub name: Option<String>,

    /// Description of the item (1-300 characters)
    pub description: Option<String>,

    /// Price of the item, must be greater than 0
    pub price: Option<f64>,

    /// Whether the item is available (defaults to true)
    pub available: Option<bool>,
}

/// Request model for partially updating an item
///
/// Only fields present in the payload are changed; absent fields keep
/// their current value.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    /// New name for the item (1-100 characters)
    pub name: Option<String>,

    /// New description for the item (1-300 characters)
    pub description: Option<String>,

    /// New price for the item, must be greater than 0
    pub price: Option<f64>,

    /// New availability flag for the item
    pub available: Option<bool>,
}

/// Response model representing a stored item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Description of the item
    pub description: String,

    /// Price of the item
    pub price: f64,

    /// Whether the item is available
    pub available: bool,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,

    /// Timestamp when the item was last modified (ISO 8601 format)
    pub updated_at: String,
}

impl From<item::Model> for ItemResponse {
    fn from(item: item::Model) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            available: item.available,
            created_at: format_timestamp(item.created_at),
            updated_at: format_timestamp(item.updated_at),
        }
    }
}

/// Response model for a page of items
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemListResponse {
    /// Items on the requested page, ordered by id ascending
    pub items: Vec<ItemResponse>,

    /// Total number of items across all pages
    pub total: u64,

    /// The requested page number (1-based)
    pub page: u64,

    /// Total number of pages (0 when there are no items)
    pub pages: u64,
}

#[derive(ApiResponse)]
pub enum CreateItemApiResponse {
    /// Item created successfully
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteItemApiResponse {
    /// Item deleted, no content returned
    #[oai(status = 204)]
    Deleted,
}

fn format_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}
