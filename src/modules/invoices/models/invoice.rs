// Invoice aggregate root with lifecycle and derived totals
//
// An invoice moves draft -> sent -> paid, never backwards. While draft it
// is fully editable; once sent, only payments can touch it. Subtotal,
// total and balance are always derived from the line items, the discount
// snapshot and the applied payments; nothing caches them, so they cannot
// drift out of sync with the data they summarize.
//
// Business rules:
// - At least one line item is required before the invoice can be sent
// - The discount is snapshotted as an amount when applied; later line
//   item edits do not re-price it
// - Total never goes below zero, whatever the discount
// - A payment may not exceed the remaining balance
// - Balance zero flips the status to paid

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::LineItem;
use crate::core::{money, AppError, Result};
use crate::modules::payments::models::Payment;

/// Invoice status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Invoice is being edited, not yet visible to the customer
    #[serde(rename = "draft")]
    Draft,

    /// Invoice issued to the customer, awaiting payment
    #[serde(rename = "sent")]
    Sent,

    /// Balance fully settled
    #[serde(rename = "paid")]
    Paid,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Draft
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Draft => write!(f, "draft"),
            InvoiceStatus::Sent => write!(f, "sent"),
            InvoiceStatus::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// How the customer settles the invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentPlan {
    /// Single payment of the full total
    #[serde(rename = "full")]
    Full,

    /// Four equal installments spread over six weeks
    #[serde(rename = "pay_in_4")]
    PayInFour,
}

impl Default for PaymentPlan {
    fn default() -> Self {
        PaymentPlan::Full
    }
}

impl std::fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentPlan::Full => write!(f, "full"),
            PaymentPlan::PayInFour => write!(f, "pay_in_4"),
        }
    }
}

impl std::str::FromStr for PaymentPlan {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "full" => Ok(PaymentPlan::Full),
            "pay_in_4" => Ok(PaymentPlan::PayInFour),
            _ => Err(format!("Invalid payment plan: {}", s)),
        }
    }
}

/// Represents an invoice issued to a customer
///
/// Fields are private; state changes go through the operations below so
/// every mutation enforces the draft/sent/paid rules. Rehydration from
/// persistence uses [`Invoice::reconstruct`].
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    id: Uuid,
    customer_id: Uuid,
    status: InvoiceStatus,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    payment_plan: PaymentPlan,
    discount_code: Option<String>,
    discount_amount: Decimal,
    line_items: Vec<LineItem>,
    payments: Vec<Payment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a new invoice in draft status
    ///
    /// The payment plan defaults to [`PaymentPlan::Full`] when not given.
    /// Creation itself cannot fail; a draft with no line items is a valid
    /// starting point and only becomes invalid to send.
    pub fn create(
        customer_id: Uuid,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        payment_plan: Option<PaymentPlan>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            customer_id,
            status: InvoiceStatus::Draft,
            issue_date,
            due_date,
            payment_plan: payment_plan.unwrap_or_default(),
            discount_code: None,
            discount_amount: Decimal::ZERO,
            line_items: Vec::new(),
            payments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a line item to the invoice
    ///
    /// Only allowed while the invoice is in draft status.
    pub fn add_line_item(&mut self, item: LineItem) -> Result<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(AppError::invalid_state(format!(
                "Cannot add line items to invoice in status: {}",
                self.status
            )));
        }

        self.line_items.push(item);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Remove a line item from the invoice
    ///
    /// Only allowed while the invoice is in draft status.
    pub fn remove_line_item(&mut self, line_item_id: Uuid) -> Result<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(AppError::invalid_state(format!(
                "Cannot remove line items from invoice in status: {}",
                self.status
            )));
        }

        let before = self.line_items.len();
        self.line_items.retain(|item| item.id() != line_item_id);
        if self.line_items.len() == before {
            return Err(AppError::validation(format!(
                "Line item with ID {} not found",
                line_item_id
            )));
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Sum of all line item totals, before discount (unrounded)
    pub fn calculate_subtotal(&self) -> Decimal {
        self.line_items.iter().map(LineItem::total).sum()
    }

    /// Total after discount, floored at zero
    pub fn calculate_total(&self) -> Decimal {
        let total = self.calculate_subtotal() - self.discount_amount;
        total.max(Decimal::ZERO)
    }

    /// Remaining balance (total minus all applied payments)
    pub fn calculate_balance(&self) -> Decimal {
        let paid: Decimal = self.payments.iter().map(Payment::amount).sum();
        self.calculate_total() - paid
    }

    /// Apply a discount code to the invoice
    ///
    /// Snapshots the discount as an amount: the current subtotal times the
    /// percentage, rounded to cents half-up. Only allowed while draft.
    pub fn apply_discount(&mut self, discount_code: &str, discount_percent: Decimal) -> Result<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(AppError::invalid_state(format!(
                "Cannot apply discount to invoice in status: {}",
                self.status
            )));
        }
        if discount_code.trim().is_empty() {
            return Err(AppError::validation("Discount code cannot be empty"));
        }
        if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
            return Err(AppError::validation(
                "Discount percent must be between 0 and 100",
            ));
        }

        self.discount_code = Some(discount_code.trim().to_uppercase());
        self.discount_amount =
            money::round_money(self.calculate_subtotal() * discount_percent / Decimal::ONE_HUNDRED);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Remove the discount from the invoice
    ///
    /// Only allowed while the invoice is in draft status.
    pub fn remove_discount(&mut self) -> Result<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(AppError::invalid_state(format!(
                "Cannot remove discount from invoice in status: {}",
                self.status
            )));
        }

        self.discount_code = None;
        self.discount_amount = Decimal::ZERO;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Mark the invoice as sent
    ///
    /// Requires draft status and at least one line item.
    pub fn mark_as_sent(&mut self) -> Result<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(AppError::invalid_state(format!(
                "Can only mark draft invoices as sent. Current status: {}",
                self.status
            )));
        }
        if self.line_items.is_empty() {
            return Err(AppError::invalid_state(
                "Cannot mark invoice as sent without line items",
            ));
        }

        self.status = InvoiceStatus::Sent;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Apply a payment to the invoice
    ///
    /// Rejects payments against a paid invoice and payments that exceed
    /// the remaining balance. When the balance reaches exactly zero the
    /// invoice transitions to paid.
    pub fn apply_payment(&mut self, payment: Payment) -> Result<()> {
        if self.status == InvoiceStatus::Paid {
            return Err(AppError::invalid_state(
                "Cannot apply payment to paid invoice",
            ));
        }

        let balance = self.calculate_balance();
        if payment.amount() > balance {
            return Err(AppError::insufficient_payment(payment.amount(), balance));
        }

        self.payments.push(payment);

        if self.calculate_balance() == Decimal::ZERO {
            self.status = InvoiceStatus::Paid;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    /// Update issue and due dates
    ///
    /// Only allowed while the invoice is in draft status.
    pub fn update_dates(&mut self, issue_date: NaiveDate, due_date: NaiveDate) -> Result<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(AppError::invalid_state(format!(
                "Cannot update invoice dates in status: {}",
                self.status
            )));
        }

        self.issue_date = issue_date;
        self.due_date = due_date;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Only draft invoices can be edited
    pub fn can_be_edited(&self) -> bool {
        self.status == InvoiceStatus::Draft
    }

    /// Only draft invoices with at least one line item can be sent
    pub fn can_be_sent(&self) -> bool {
        self.status == InvoiceStatus::Draft && !self.line_items.is_empty()
    }

    // Accessors

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn payment_plan(&self) -> PaymentPlan {
        self.payment_plan
    }

    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code.as_deref()
    }

    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// Line items in insertion order
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Applied payments in application order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Rebuild an invoice from persisted state
    ///
    /// Trusted path for repository adapters; performs no validation and
    /// takes the stored fields as given.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: Uuid,
        customer_id: Uuid,
        status: InvoiceStatus,
        issue_date: NaiveDate,
        due_date: NaiveDate,
        payment_plan: PaymentPlan,
        discount_code: Option<String>,
        discount_amount: Decimal,
        line_items: Vec<LineItem>,
        payments: Vec<Payment>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            status,
            issue_date,
            due_date,
            payment_plan,
            discount_code,
            discount_amount,
            line_items,
            payments,
            created_at,
            updated_at,
        }
    }
}
