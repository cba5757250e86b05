use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use std::sync::Arc;

use catalog_backend::api::{HealthApi, ItemsApi};
use catalog_backend::app_data::AppData;
use catalog_backend::config::{init_database, init_logging, migrate_database};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    // Load database URL from environment or use default
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://items.db?mode=rwc".to_string());

    let db = init_database(&database_url)
        .await
        .expect("Failed to connect to database");

    migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    let app_data = Arc::new(AppData::init(db));

    let items_api = ItemsApi::new(app_data.clone());

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new((HealthApi, items_api), "Item Catalog API", "1.0.0")
        .server("http://localhost:3000/api");

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());

    tracing::info!("Starting server on http://{}:{}", host, port);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger", port);

    Server::new(TcpListener::bind(format!("{}:{}", host, port)))
        .run(app)
        .await
}
