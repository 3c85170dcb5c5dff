// Test data factory
//
// Builders for commands with sensible defaults. Invoice dates are fixed
// so schedule expectations stay deterministic; payment dates use today
// because future-dated payments are rejected.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use invoicekit::invoices::{
    AddLineItemCommand, CreateInvoiceCommand, PaymentPlan, RemoveLineItemCommand,
    UpdateInvoiceCommand,
};
use invoicekit::payments::RecordPaymentCommand;

/// Test data factory for building commands
pub struct TestDataFactory;

impl TestDataFactory {
    pub fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
    }

    /// Create-invoice command with the fixed test dates
    pub fn create_invoice(
        customer_id: Uuid,
        payment_plan: Option<PaymentPlan>,
    ) -> CreateInvoiceCommand {
        CreateInvoiceCommand {
            customer_id,
            issue_date: Self::issue_date(),
            due_date: Self::due_date(),
            payment_plan,
        }
    }

    /// Line item command with explicit description and price
    pub fn line_item(
        invoice_id: Uuid,
        description: &str,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> AddLineItemCommand {
        AddLineItemCommand {
            invoice_id,
            item_id: None,
            description: description.to_string(),
            quantity,
            unit_price,
        }
    }

    /// Line item command referencing a catalog item
    ///
    /// Description and price are deliberately bogus; the catalog values
    /// are expected to override them.
    pub fn catalog_line_item(
        invoice_id: Uuid,
        item_id: Uuid,
        quantity: Decimal,
    ) -> AddLineItemCommand {
        AddLineItemCommand {
            invoice_id,
            item_id: Some(item_id),
            description: "Caller supplied".to_string(),
            quantity,
            unit_price: Decimal::ONE,
        }
    }

    /// Remove-line-item command
    pub fn remove_line_item(invoice_id: Uuid, line_item_id: Uuid) -> RemoveLineItemCommand {
        RemoveLineItemCommand {
            invoice_id,
            line_item_id,
        }
    }

    /// Update-dates command
    pub fn update_invoice(
        invoice_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> UpdateInvoiceCommand {
        UpdateInvoiceCommand {
            invoice_id,
            issue_date,
            due_date,
        }
    }

    /// Payment command dated today
    pub fn record_payment(invoice_id: Uuid, amount: Decimal) -> RecordPaymentCommand {
        RecordPaymentCommand {
            invoice_id,
            amount,
            payment_date: Utc::now().date_naive(),
            payment_method: Some("bank_transfer".to_string()),
        }
    }
}
