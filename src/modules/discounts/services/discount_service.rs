// Business logic for discount codes
//
// Applying a code snapshots its percent into the invoice as an amount;
// later changes to the code (or its active flag) leave already-discounted
// invoices untouched. Validation is a read-only preview of the same
// checks apply performs.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::discounts::models::{
    ApplyDiscountCommand, DiscountCode, DiscountCodeDto, DiscountCodeValidationDto,
};
use crate::modules::discounts::repositories::DiscountCodeRepository;
use crate::modules::invoices::repositories::InvoiceRepository;

/// Codes seeded into an empty repository, as (code, percent)
const DEFAULT_CODES: [(&str, u32); 2] = [("SAVE15", 15), ("FANDF", 30)];

/// Service for discount code business logic
pub struct DiscountService {
    discount_repo: Arc<dyn DiscountCodeRepository>,
    invoice_repo: Arc<dyn InvoiceRepository>,
}

impl DiscountService {
    pub fn new(
        discount_repo: Arc<dyn DiscountCodeRepository>,
        invoice_repo: Arc<dyn InvoiceRepository>,
    ) -> Self {
        Self {
            discount_repo,
            invoice_repo,
        }
    }

    /// Apply a discount code to a draft invoice
    ///
    /// The code lookup is case-insensitive and only active codes can be
    /// applied. The invoice stores the canonical code and the discount
    /// amount computed from the current subtotal.
    pub async fn apply_discount(&self, command: ApplyDiscountCommand) -> Result<()> {
        let mut invoice = self
            .invoice_repo
            .find_by_id(command.invoice_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Invoice with ID {} not found", command.invoice_id))
            })?;

        let discount_code = self
            .discount_repo
            .find_by_code(&command.discount_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Discount code '{}' not found",
                    command.discount_code
                ))
            })?;

        if !discount_code.is_active() {
            return Err(AppError::validation(format!(
                "Discount code '{}' is not active",
                command.discount_code
            )));
        }

        invoice.apply_discount(discount_code.code(), discount_code.discount_percent())?;
        self.invoice_repo.save(&invoice).await?;

        info!(
            invoice_id = %invoice.id(),
            discount_code = discount_code.code(),
            discount_amount = %invoice.discount_amount(),
            "Discount applied"
        );

        Ok(())
    }

    /// Remove the discount from a draft invoice
    pub async fn remove_discount(&self, invoice_id: Uuid) -> Result<()> {
        let mut invoice = self
            .invoice_repo
            .find_by_id(invoice_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Invoice with ID {} not found", invoice_id))
            })?;

        invoice.remove_discount()?;
        self.invoice_repo.save(&invoice).await?;

        info!(invoice_id = %invoice.id(), "Discount removed");

        Ok(())
    }

    /// Check a discount code without applying it
    ///
    /// Never errors; the result says whether the code exists and is
    /// active, with the percent included only when it is usable.
    pub async fn validate_code(&self, code: &str) -> Result<DiscountCodeValidationDto> {
        let discount_code = self.discount_repo.find_by_code(code).await?;

        let Some(discount_code) = discount_code else {
            return Ok(DiscountCodeValidationDto {
                valid: false,
                message: "Discount code not found".to_string(),
                discount_percent: None,
            });
        };

        if !discount_code.is_active() {
            return Ok(DiscountCodeValidationDto {
                valid: false,
                message: "Discount code is not active".to_string(),
                discount_percent: None,
            });
        }

        Ok(DiscountCodeValidationDto {
            valid: true,
            message: "Discount code is valid".to_string(),
            discount_percent: Some(discount_code.discount_percent()),
        })
    }

    /// List every discount code, active or not
    pub async fn list_codes(&self) -> Result<Vec<DiscountCodeDto>> {
        let codes = self.discount_repo.find_all().await?;
        Ok(codes.iter().map(Self::to_dto).collect())
    }

    /// Seed the well-known default codes, skipping ones that already exist
    pub async fn seed_default_codes(&self) -> Result<()> {
        for (code, percent) in DEFAULT_CODES {
            if self.discount_repo.exists_by_code(code).await? {
                continue;
            }

            let percent = Decimal::from(percent);
            self.discount_repo
                .save(&DiscountCode::create(code, percent)?)
                .await?;
            info!(code = code, percent = %percent, "Seeded discount code");
        }

        Ok(())
    }

    fn to_dto(code: &DiscountCode) -> DiscountCodeDto {
        DiscountCodeDto {
            code: code.code().to_string(),
            discount_percent: code.discount_percent(),
            is_active: code.is_active(),
            created_at: code.created_at(),
            updated_at: code.updated_at(),
        }
    }
}
