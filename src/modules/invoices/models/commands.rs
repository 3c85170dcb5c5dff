// Command and projection types for invoice operations
//
// Commands carry caller intent into the services; DTOs carry read-only
// projections back out. Derived amounts on the DTOs (subtotal, total,
// balance) are computed from the aggregate at projection time.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::invoice::{InvoiceStatus, PaymentPlan};
use crate::modules::payments::models::PaymentDto;

/// Create a new draft invoice for a customer
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceCommand {
    pub customer_id: Uuid,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Defaults to a single full payment when omitted
    pub payment_plan: Option<PaymentPlan>,
}

/// Add a line item to a draft invoice
///
/// When `item_id` references a catalog item, that item's description and
/// unit price override the ones supplied here; the quantity is always
/// taken from the command.
#[derive(Debug, Clone, Deserialize)]
pub struct AddLineItemCommand {
    pub invoice_id: Uuid,
    pub item_id: Option<Uuid>,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

/// Remove a line item from a draft invoice
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveLineItemCommand {
    pub invoice_id: Uuid,
    pub line_item_id: Uuid,
}

/// Update the dates of a draft invoice
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoiceCommand {
    pub invoice_id: Uuid,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Full invoice projection including line items and payments
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub payment_plan: PaymentPlan,
    pub discount_code: Option<String>,
    pub discount_amount: Decimal,
    pub subtotal: Decimal,
    pub total_amount: Decimal,
    pub balance: Decimal,
    pub line_items: Vec<LineItemDto>,
    pub payments: Vec<PaymentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Line item projection
#[derive(Debug, Clone, Serialize)]
pub struct LineItemDto {
    pub id: Uuid,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total: Decimal,
}

/// Lightweight invoice projection for list queries
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummaryDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub total_amount: Decimal,
    pub balance: Decimal,
}
