use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::ItemApiError;
use crate::services::ItemService;
use crate::types::dto::items::{
    CreateItemApiResponse, CreateItemRequest, DeleteItemApiResponse, ItemListResponse,
    ItemResponse, UpdateItemRequest,
};

/// Items API endpoints
pub struct ItemsApi {
    item_service: ItemService,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_service: ItemService::new(app_data),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi(prefix_path = "/items")]
impl ItemsApi {
    /// Create a new item
    ///
    /// Accepts item details and returns the created item with generated
    /// id and timestamps. Missing required fields are rejected with 400,
    /// field rule violations with 422.
    #[oai(path = "/", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemApiResponse, ItemApiError> {
        let item = self.item_service.create_item(&body.0).await?;

        Ok(CreateItemApiResponse::Created(Json(ItemResponse::from(item))))
    }

    /// List items with pagination
    ///
    /// Returns the requested page ordered by id ascending, along with the
    /// total item count and the number of pages. Defaults: page=1, size=10.
    #[oai(path = "/", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        page: Query<Option<u64>>,
        size: Query<Option<u64>>,
    ) -> Result<Json<ItemListResponse>, ItemApiError> {
        let page = page.0.unwrap_or(1);
        let size = size.0.unwrap_or(10);

        let listing = self.item_service.list_items(page, size).await?;

        Ok(Json(ItemListResponse {
            items: listing.items.into_iter().map(ItemResponse::from).collect(),
            total: listing.total,
            page: listing.page,
            pages: listing.pages,
        }))
    }

    /// Get a single item by id
    #[oai(path = "/:item_id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, item_id: Path<i32>) -> Result<Json<ItemResponse>, ItemApiError> {
        let item = self.item_service.get_item(item_id.0).await?;

        Ok(Json(ItemResponse::from(item)))
    }

    /// Partially update an existing item
    ///
    /// Only fields present in the payload are changed; absent fields keep
    /// their current value.
    #[oai(path = "/:item_id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        item_id: Path<i32>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemApiError> {
        let item = self.item_service.update_item(item_id.0, &body.0).await?;

        Ok(Json(ItemResponse::from(item)))
    }

    /// Delete an item by id
    #[oai(path = "/:item_id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, item_id: Path<i32>) -> Result<DeleteItemApiResponse, ItemApiError> {
        self.item_service.delete_item(item_id.0).await?;

        Ok(DeleteItemApiResponse::Deleted)
    }
}
