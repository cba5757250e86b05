use crate::stores::{ItemPatch, NewItem};
use crate::types::dto::items::{CreateItemRequest, UpdateItemRequest};

/// Item validator service that enforces field constraints
///
/// Create payloads go through two layers in order:
/// 1. Required-field presence (name, description, price)
/// 2. Per-field rules (length bounds, positive price)
///
/// Update payloads skip the presence layer; any field that is present is
/// held to the same per-field rule as on creation.
pub struct ItemValidator {
    name_max_length: usize,
    description_max_length: usize,
}

impl ItemValidator {
    /// Create a new item validator with the standard field limits
    pub fn new() -> Self {
        Self {
            name_max_length: 100,
            description_max_length: 300,
        }
    }

    /// Validate a create payload
    ///
    /// Presence of all required fields is checked before any per-field
    /// rule, so a payload that is both incomplete and malformed reports
    /// the missing field. `available` defaults to true when absent,
    /// independently of the other checks.
    ///
    /// # Returns
    /// * `Ok(NewItem)` - Validated fields ready for insertion
    /// * `Err(ItemValidationError)` - First violated rule
    pub fn validate_create(
        &self,
        request: &CreateItemRequest,
    ) -> Result<NewItem, ItemValidationError> {
        let name = request
            .name
            .clone()
            .ok_or(ItemValidationError::MissingField("name"))?;
        let description = request
            .description
            .clone()
            .ok_or(ItemValidationError::MissingField("description"))?;
        let price = request
            .price
            .ok_or(ItemValidationError::MissingField("price"))?;

        self.validate_name(&name)?;
        self.validate_description(&description)?;
        self.validate_price(price)?;

        Ok(NewItem {
            name,
            description,
            price,
            available: request.available.unwrap_or(true),
        })
    }

    /// Validate an update payload
    ///
    /// All fields are optional; absent fields pass through as `None` and
    /// are left untouched downstream.
    ///
    /// # Returns
    /// * `Ok(ItemPatch)` - Validated subset of fields to apply
    /// * `Err(ItemValidationError)` - First violated rule
    pub fn validate_update(
        &self,
        request: &UpdateItemRequest,
    ) -> Result<ItemPatch, ItemValidationError> {
        if let Some(name) = &request.name {
            self.validate_name(name)?;
        }
        if let Some(description) = &request.description {
            self.validate_description(description)?;
        }
        if let Some(price) = request.price {
            self.validate_price(price)?;
        }

        Ok(ItemPatch {
            name: request.name.clone(),
            description: request.description.clone(),
            price: request.price,
            available: request.available,
        })
    }

    fn validate_name(&self, name: &str) -> Result<(), ItemValidationError> {
        if name.is_empty() {
            return Err(ItemValidationError::InvalidField {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if name.chars().count() > self.name_max_length {
            return Err(ItemValidationError::InvalidField {
                field: "name",
                reason: format!("must not exceed {} characters", self.name_max_length),
            });
        }
        Ok(())
    }

    fn validate_description(&self, description: &str) -> Result<(), ItemValidationError> {
        if description.is_empty() {
            return Err(ItemValidationError::InvalidField {
                field: "description",
                reason: "must not be empty".to_string(),
            });
        }
        if description.chars().count() > self.description_max_length {
            return Err(ItemValidationError::InvalidField {
                field: "description",
                reason: format!("must not exceed {} characters", self.description_max_length),
            });
        }
        Ok(())
    }

    fn validate_price(&self, price: f64) -> Result<(), ItemValidationError> {
        // Written as a negation so NaN is rejected too
        if !(price > 0.0) {
            return Err(ItemValidationError::InvalidField {
                field: "price",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ItemValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during item payload validation
#[derive(Debug, thiserror::Error)]
pub enum ItemValidationError {
    /// A required field is absent from the create payload
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    /// A supplied field fails its length or range rule
    #[error("Field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}
