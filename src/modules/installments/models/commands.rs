// Command and projection types for installment operations

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::payment_schedule::InstallmentStatus;

/// Create the Pay-in-4 schedule for an invoice
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentScheduleCommand {
    pub invoice_id: Uuid,
    pub total_amount: Decimal,
    pub start_date: NaiveDate,
}

/// Try to match a recorded payment to the next pending installment
#[derive(Debug, Clone, Deserialize)]
pub struct MarkInstallmentPaidCommand {
    pub invoice_id: Uuid,
    pub payment_amount: Decimal,
}

/// Installment projection
#[derive(Debug, Clone, Serialize)]
pub struct InstallmentDto {
    pub id: Uuid,
    pub invoice_id: Uuid,
    pub installment_number: i32,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: InstallmentStatus,
    pub created_at: DateTime<Utc>,
}
