// Services layer - Business logic and orchestration
pub mod item_service;
pub mod item_validator;

pub use item_service::{ItemPage, ItemService};
pub use item_validator::{ItemValidationError, ItemValidator};

#[cfg(test)]
mod item_service_tests;
