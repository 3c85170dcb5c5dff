// Catalog item entity
//
// Reusable items from the item library. When a line item references one of
// these, the catalog description and unit price override whatever the
// caller supplied.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A reusable item from the catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    id: Uuid,
    description: String,
    unit_price: Decimal,
}

impl CatalogItem {
    /// Create a new catalog item with validation
    pub fn new(description: impl Into<String>, unit_price: Decimal) -> Result<Self> {
        Self::of(Uuid::new_v4(), description, unit_price)
    }

    /// Create a catalog item with a known ID
    pub fn of(id: Uuid, description: impl Into<String>, unit_price: Decimal) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(AppError::validation("Item description cannot be empty"));
        }
        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Item unit price cannot be negative, got: {}",
                unit_price
            )));
        }

        Ok(Self {
            id,
            description: description.trim().to_string(),
            unit_price,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }
}
