// LineItem value object with total calculation
//
// A line item represents a single product or service on an invoice.
// Line items are immutable once created. The total (quantity × unit_price)
// is computed at construction and kept unrounded so that invoice-level
// sums work on exact values; rounding happens only at the money boundary
// (discount snapshots, installment amounts).

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A single line item on an invoice
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    id: Uuid,
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    total: Decimal,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `description` - Product/service description (trimmed, must not be empty)
    /// * `quantity` - Must be positive; fractional quantities (e.g. hours) are allowed
    /// * `unit_price` - Must be non-negative
    ///
    /// # Returns
    /// * `Result<Self>` - Validated line item or error
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Result<Self> {
        Self::of(Uuid::new_v4(), description, quantity, unit_price)
    }

    /// Create a line item with a specific ID (for rehydration from persistence)
    ///
    /// Runs the same validation as [`LineItem::new`]; stored rows that no
    /// longer satisfy the invariants surface as errors instead of silently
    /// re-entering the domain.
    pub fn of(
        id: Uuid,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self> {
        let description = description.into();
        Self::validate_description(&description)?;
        Self::validate_quantity(quantity)?;
        Self::validate_unit_price(unit_price)?;

        Ok(Self {
            id,
            description: description.trim().to_string(),
            quantity,
            unit_price,
            total: quantity * unit_price,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Raw total for this line (quantity × unit_price, unrounded)
    pub fn total(&self) -> Decimal {
        self.total
    }

    fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(AppError::validation("Line item description cannot be empty"));
        }

        Ok(())
    }

    fn validate_quantity(quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Line item quantity must be greater than zero, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Line item unit price cannot be negative, got: {}",
                unit_price
            )));
        }

        Ok(())
    }
}
