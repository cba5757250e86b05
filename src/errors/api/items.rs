use crate::errors::internal::InternalError;
use crate::services::item_validator::ItemValidationError;
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Item API error types
#[derive(ApiResponse, Debug)]
pub enum ItemApiError {
    /// A required field is missing from the create payload
    #[oai(status = 400)]
    MissingRequiredField(Json<ErrorResponse>),

    /// The requested item does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// A supplied field violates its validation rule
    #[oai(status = 422)]
    ValidationFailed(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemApiError {
    /// Create a MissingRequiredField error
    pub fn missing_required_field(field: &str) -> Self {
        ItemApiError::MissingRequiredField(Json(ErrorResponse {
            error: "missing_required_field".to_string(),
            message: format!("Field '{}' is required", field),
            status_code: 400,
        }))
    }

    /// Create a NotFound error for the given item id
    pub fn not_found(item_id: i32) -> Self {
        ItemApiError::NotFound(Json(ErrorResponse {
            error: "item_not_found".to_string(),
            message: format!("Item with id {} not found", item_id),
            status_code: 404,
        }))
    }

    /// Create a ValidationFailed error
    pub fn validation_failed(field: &str, reason: &str) -> Self {
        ItemApiError::ValidationFailed(Json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: format!("Field '{}' is invalid: {}", field, reason),
            status_code: 422,
        }))
    }

    /// Convert ItemValidationError to ItemApiError
    ///
    /// Missing required fields are client request errors (400), while
    /// per-field rule violations are request format errors (422).
    pub fn from_validation_error(err: ItemValidationError) -> Self {
        match err {
            ItemValidationError::MissingField(field) => {
                tracing::debug!("Rejected payload missing field '{}'", field);
                Self::missing_required_field(field)
            }
            ItemValidationError::InvalidField { field, reason } => {
                tracing::debug!("Rejected payload: field '{}' {}", field, reason);
                Self::validation_failed(field, &reason)
            }
        }
    }

    /// Convert InternalError to ItemApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Database(_) => {
                tracing::error!("Database error in item operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        ItemApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemApiError::MissingRequiredField(json) => json.0.message.clone(),
            ItemApiError::NotFound(json) => json.0.message.clone(),
            ItemApiError::ValidationFailed(json) => json.0.message.clone(),
            ItemApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ItemApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
