// DiscountCode entity
//
// Business rules:
// - Codes are stored upper-case; lookups are case-insensitive at the
//   repository boundary
// - Discount percent must be between 0 and 100
// - Only active codes can be applied to invoices (enforced by the
//   discount service)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{money, AppError, Result};

/// A percentage discount code applicable to draft invoices
#[derive(Debug, Clone, Serialize)]
pub struct DiscountCode {
    code: String,
    discount_percent: Decimal,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DiscountCode {
    /// Create a new discount code with validation
    ///
    /// The code is trimmed and upper-cased; `save15` and `SAVE15` are the
    /// same code.
    pub fn create(code: impl Into<String>, discount_percent: Decimal) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(AppError::validation("Discount code cannot be empty"));
        }
        if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
            return Err(AppError::validation(
                "Discount percent must be between 0 and 100",
            ));
        }

        let now = Utc::now();
        Ok(Self {
            code: code.trim().to_uppercase(),
            discount_percent,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Activate the code
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Deactivate the code without deleting it
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Discount amount for a given total, rounded to cents half-up
    ///
    /// Non-positive totals yield a zero discount.
    pub fn calculate_discount_amount(&self, total: Decimal) -> Decimal {
        if total <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        money::round_money(total * self.discount_percent / Decimal::ONE_HUNDRED)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Rebuild a discount code from persisted state (trusted, no validation)
    pub fn reconstruct(
        code: String,
        discount_percent: Decimal,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            discount_percent,
            is_active,
            created_at,
            updated_at,
        }
    }
}
