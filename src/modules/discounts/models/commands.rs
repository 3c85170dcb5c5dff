// Command and projection types for discount code operations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Apply a discount code to a draft invoice
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyDiscountCommand {
    pub invoice_id: Uuid,
    pub discount_code: String,
}

/// Discount code projection
#[derive(Debug, Clone, Serialize)]
pub struct DiscountCodeDto {
    pub code: String,
    pub discount_percent: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of checking a discount code without applying it
///
/// `discount_percent` is only present when the code is valid.
#[derive(Debug, Clone, Serialize)]
pub struct DiscountCodeValidationDto {
    pub valid: bool,
    pub message: String,
    pub discount_percent: Option<Decimal>,
}
