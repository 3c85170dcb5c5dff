// Payment entity recorded against an invoice
//
// Business rules:
// - Amount must be positive
// - Payment date cannot be in the future
// - A payment may not exceed the remaining balance of its invoice

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::Invoice;

/// A payment applied to an invoice
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    id: Uuid,
    invoice_id: Uuid,
    amount: Decimal,
    payment_date: NaiveDate,
    payment_method: Option<String>,
    created_at: DateTime<Utc>,
}

impl Payment {
    /// Create a new payment with validation
    ///
    /// # Arguments
    /// * `invoice_id` - Invoice the payment belongs to
    /// * `amount` - Must be positive
    /// * `payment_date` - Must not lie in the future
    /// * `payment_method` - Free-form label (e.g. "bank_transfer"), optional
    pub fn create(
        invoice_id: Uuid,
        amount: Decimal,
        payment_date: NaiveDate,
        payment_method: Option<String>,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(AppError::validation(
                "Payment amount must be greater than zero",
            ));
        }
        if payment_date > Utc::now().date_naive() {
            return Err(AppError::validation("Payment date cannot be in the future"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            invoice_id,
            amount,
            payment_date,
            payment_method,
            created_at: Utc::now(),
        })
    }

    /// Validate this payment against the invoice it targets
    ///
    /// Checks that the payment references the given invoice and that the
    /// amount does not exceed the remaining balance. The invoice itself is
    /// not modified; [`Invoice::apply_payment`] repeats the balance check
    /// at mutation time.
    pub fn validate_against_invoice(&self, invoice: &Invoice) -> Result<()> {
        if invoice.id() != self.invoice_id {
            return Err(AppError::validation(
                "Payment invoice ID does not match provided invoice",
            ));
        }

        let balance = invoice.calculate_balance();
        if self.amount > balance {
            return Err(AppError::insufficient_payment(self.amount, balance));
        }

        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn invoice_id(&self) -> Uuid {
        self.invoice_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rebuild a payment from persisted state (trusted, no validation)
    pub fn reconstruct(
        id: Uuid,
        invoice_id: Uuid,
        amount: Decimal,
        payment_date: NaiveDate,
        payment_method: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            invoice_id,
            amount,
            payment_date,
            payment_method,
            created_at,
        }
    }
}
