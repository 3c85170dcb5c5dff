// Installment entry of a Pay-in-4 schedule
//
// Business rules:
// - Installment number must be 1-4
// - Amount must be positive
// - A paid installment stays paid; marking it paid again is an error,
//   marking it overdue is ignored

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Installment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    /// Not yet paid
    Pending,
    /// Payment received
    Paid,
    /// Due date passed without payment
    Overdue,
}

impl InstallmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for InstallmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for InstallmentStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(format!("Invalid installment status: {}", value)),
        }
    }
}

/// One scheduled installment of a Pay-in-4 plan
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSchedule {
    id: Uuid,
    invoice_id: Uuid,
    installment_number: i32,
    amount: Decimal,
    due_date: NaiveDate,
    status: InstallmentStatus,
    created_at: DateTime<Utc>,
}

impl PaymentSchedule {
    /// Create a new installment with validation
    ///
    /// # Arguments
    /// * `invoice_id` - Parent invoice ID
    /// * `installment_number` - Position in the plan, 1 through 4
    /// * `amount` - Must be positive
    /// * `due_date` - Payment due date
    pub fn create(
        invoice_id: Uuid,
        installment_number: i32,
        amount: Decimal,
        due_date: NaiveDate,
    ) -> Result<Self> {
        if !(1..=4).contains(&installment_number) {
            return Err(AppError::validation(format!(
                "Installment number must be between 1 and 4, got {}",
                installment_number
            )));
        }
        if amount <= Decimal::ZERO {
            return Err(AppError::validation(
                "Installment amount must be greater than zero",
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            invoice_id,
            installment_number,
            amount,
            due_date,
            status: InstallmentStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// Mark the installment as paid
    ///
    /// Paying an installment twice is an error; overdue installments can
    /// still be paid.
    pub fn mark_as_paid(&mut self) -> Result<()> {
        if self.status == InstallmentStatus::Paid {
            return Err(AppError::validation("Installment is already paid"));
        }

        self.status = InstallmentStatus::Paid;
        Ok(())
    }

    /// Mark the installment as overdue if its due date has passed
    ///
    /// No-op for paid installments and for installments not yet due.
    pub fn mark_as_overdue(&mut self) {
        if self.status == InstallmentStatus::Paid {
            return;
        }
        if Utc::now().date_naive() > self.due_date {
            self.status = InstallmentStatus::Overdue;
        }
    }

    /// Still awaiting a matching payment
    pub fn is_pending(&self) -> bool {
        self.status == InstallmentStatus::Pending
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn invoice_id(&self) -> Uuid {
        self.invoice_id
    }

    pub fn installment_number(&self) -> i32 {
        self.installment_number
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn status(&self) -> InstallmentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rebuild an installment from persisted state (trusted, no validation)
    pub fn reconstruct(
        id: Uuid,
        invoice_id: Uuid,
        installment_number: i32,
        amount: Decimal,
        due_date: NaiveDate,
        status: InstallmentStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            invoice_id,
            installment_number,
            amount,
            due_date,
            status,
            created_at,
        }
    }
}
