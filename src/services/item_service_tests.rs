#[cfg(test)]
mod tests {
    use crate::errors::ItemApiError;
    use crate::test::utils::setup_test_service;
    use crate::types::dto::items::{CreateItemRequest, UpdateItemRequest};

    fn create_request(name: &str, description: &str, price: f64) -> CreateItemRequest {
        CreateItemRequest {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            price: Some(price),
            available: None,
        }
    }

    fn empty_update() -> UpdateItemRequest {
        UpdateItemRequest {
            name: None,
            description: None,
            price: None,
            available: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids_and_timestamps() {
        let service = setup_test_service().await;

        let first = service
            .create_item(&create_request("Item 1", "Description 1", 10.0))
            .await
            .unwrap();
        let second = service
            .create_item(&create_request("Item 2", "Description 2", 20.0))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert!(first.created_at > 0);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_list_clamps_non_positive_page_and_size() {
        let service = setup_test_service().await;
        for i in 0..3 {
            service
                .create_item(&create_request(
                    &format!("Item {}", i),
                    &format!("Description {}", i),
                    10.0 + i as f64,
                ))
                .await
                .unwrap();
        }

        let listing = service.list_items(0, 0).await.unwrap();

        assert_eq!(listing.page, 1);
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.pages, 3);
    }

    #[tokio::test]
    async fn test_list_empty_table_has_zero_pages() {
        let service = setup_test_service().await;

        let listing = service.list_items(1, 10).await.unwrap();

        assert_eq!(listing.total, 0);
        assert_eq!(listing.pages, 0);
        assert!(listing.items.is_empty());
    }

    #[tokio::test]
    async fn test_page_count_rounds_up() {
        let service = setup_test_service().await;
        for i in 0..5 {
            service
                .create_item(&create_request(
                    &format!("Item {}", i),
                    &format!("Description {}", i),
                    1.0 + i as f64,
                ))
                .await
                .unwrap();
        }

        let listing = service.list_items(1, 2).await.unwrap();

        assert_eq!(listing.total, 5);
        assert_eq!(listing.pages, 3);
    }

    #[tokio::test]
    async fn test_empty_patch_keeps_fields_and_refreshes_updated_at() {
        let service = setup_test_service().await;
        let created = service
            .create_item(&create_request("Keyboard", "Mechanical keyboard", 100.0))
            .await
            .unwrap();

        // Timestamps have second resolution
        tokio::time::sleep(tokio::time::Duration::from_millis(1100)).await;

        let updated = service
            .update_item(created.id, &empty_update())
            .await
            .unwrap();

        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.available, created.available);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_item_reports_not_found() {
        let service = setup_test_service().await;

        let result = service.update_item(9999, &empty_update()).await;

        assert!(matches!(result, Err(ItemApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_field_before_writing() {
        let service = setup_test_service().await;
        let created = service
            .create_item(&create_request("Mouse", "Mouse wireless", 25.99))
            .await
            .unwrap();

        let mut request = empty_update();
        request.price = Some(-5.0);
        let result = service.update_item(created.id, &request).await;
        assert!(matches!(result, Err(ItemApiError::ValidationFailed(_))));

        // The stored row is untouched
        let fetched = service.get_item(created.id).await.unwrap();
        assert_eq!(fetched.price, 25.99);
    }

    #[tokio::test]
    async fn test_deleted_item_is_gone() {
        let service = setup_test_service().await;
        let created = service
            .create_item(&create_request("Monitor", "Monitor 144hz", 300.0))
            .await
            .unwrap();

        service.delete_item(created.id).await.unwrap();

        let result = service.get_item(created.id).await;
        assert!(matches!(result, Err(ItemApiError::NotFound(_))));

        let result = service.delete_item(created.id).await;
        assert!(matches!(result, Err(ItemApiError::NotFound(_))));
    }
}
