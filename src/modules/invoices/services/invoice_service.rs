// Business logic for the invoice lifecycle
//
// Draft invoices are assembled here (line items, dates), then sent and
// eventually settled through the payment service. Sending a Pay-in-4
// invoice also creates its installment schedule; the schedule must exist
// before the sent invoice is persisted so a schedule failure leaves the
// invoice in draft.

use std::sync::Arc;

use chrono::Duration;
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Paged, Result};
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::installments::models::CreatePaymentScheduleCommand;
use crate::modules::installments::services::InstallmentService;
use crate::modules::invoices::models::{
    AddLineItemCommand, CreateInvoiceCommand, Invoice, InvoiceDto, InvoiceStatus,
    InvoiceSummaryDto, LineItem, LineItemDto, PaymentPlan, RemoveLineItemCommand,
    UpdateInvoiceCommand,
};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::items::repositories::ItemRepository;
use crate::modules::payments::models::PaymentDto;

/// Service for invoice business logic
pub struct InvoiceService {
    invoice_repo: Arc<dyn InvoiceRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
    item_repo: Arc<dyn ItemRepository>,
    installment_service: Arc<InstallmentService>,
}

impl InvoiceService {
    pub fn new(
        invoice_repo: Arc<dyn InvoiceRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        item_repo: Arc<dyn ItemRepository>,
        installment_service: Arc<InstallmentService>,
    ) -> Self {
        Self {
            invoice_repo,
            customer_repo,
            item_repo,
            installment_service,
        }
    }

    /// Create a new draft invoice for an existing customer
    ///
    /// # Returns
    /// The ID of the created invoice
    pub async fn create_invoice(&self, command: CreateInvoiceCommand) -> Result<Uuid> {
        if !self.customer_repo.exists_by_id(command.customer_id).await? {
            return Err(AppError::not_found(format!(
                "Customer with ID {} not found",
                command.customer_id
            )));
        }

        let invoice = Invoice::create(
            command.customer_id,
            command.issue_date,
            command.due_date,
            command.payment_plan,
        );
        self.invoice_repo.save(&invoice).await?;

        info!(
            invoice_id = %invoice.id(),
            customer_id = %command.customer_id,
            payment_plan = %invoice.payment_plan(),
            "Invoice created"
        );

        Ok(invoice.id())
    }

    /// Add a line item to a draft invoice
    ///
    /// When the command references a catalog item, the catalog description
    /// and unit price win over the ones supplied; the quantity always
    /// comes from the command.
    ///
    /// # Returns
    /// The ID of the new line item
    pub async fn add_line_item(&self, command: AddLineItemCommand) -> Result<Uuid> {
        let mut invoice = self.load_invoice(command.invoice_id).await?;

        let (description, unit_price) = match command.item_id {
            Some(item_id) => {
                let item = self.item_repo.find_by_id(item_id).await?.ok_or_else(|| {
                    AppError::not_found(format!("Item with ID {} not found", item_id))
                })?;
                (item.description().to_string(), item.unit_price())
            }
            None => (command.description, command.unit_price),
        };

        let line_item = LineItem::new(description, command.quantity, unit_price)?;
        let line_item_id = line_item.id();

        invoice.add_line_item(line_item)?;
        self.invoice_repo.save(&invoice).await?;

        info!(
            invoice_id = %invoice.id(),
            line_item_id = %line_item_id,
            "Line item added"
        );

        Ok(line_item_id)
    }

    /// Remove a line item from a draft invoice
    pub async fn remove_line_item(&self, command: RemoveLineItemCommand) -> Result<()> {
        let mut invoice = self.load_invoice(command.invoice_id).await?;

        invoice.remove_line_item(command.line_item_id)?;
        self.invoice_repo.save(&invoice).await?;

        info!(
            invoice_id = %invoice.id(),
            line_item_id = %command.line_item_id,
            "Line item removed"
        );

        Ok(())
    }

    /// Update the dates of a draft invoice
    pub async fn update_invoice(&self, command: UpdateInvoiceCommand) -> Result<()> {
        let mut invoice = self.load_invoice(command.invoice_id).await?;

        invoice.update_dates(command.issue_date, command.due_date)?;
        self.invoice_repo.save(&invoice).await?;

        Ok(())
    }

    /// Mark a draft invoice as sent
    ///
    /// Requires at least one line item. For Pay-in-4 invoices the four
    /// installments are scheduled starting two weeks after the issue
    /// date; if scheduling fails the invoice is not persisted and stays
    /// draft.
    pub async fn mark_as_sent(&self, invoice_id: Uuid) -> Result<()> {
        let mut invoice = self.load_invoice(invoice_id).await?;

        invoice.mark_as_sent()?;

        if invoice.payment_plan() == PaymentPlan::PayInFour {
            let start_date = invoice
                .issue_date()
                .checked_add_signed(Duration::weeks(2))
                .ok_or_else(|| {
                    AppError::validation("Failed to calculate installment start date")
                })?;

            self.installment_service
                .create_schedule(CreatePaymentScheduleCommand {
                    invoice_id: invoice.id(),
                    total_amount: invoice.calculate_total(),
                    start_date,
                })
                .await?;
        }

        self.invoice_repo.save(&invoice).await?;

        info!(
            invoice_id = %invoice.id(),
            payment_plan = %invoice.payment_plan(),
            total = %invoice.calculate_total(),
            "Invoice marked as sent"
        );

        Ok(())
    }

    /// Get a full invoice projection by ID
    pub async fn get_invoice(&self, invoice_id: Uuid) -> Result<InvoiceDto> {
        let invoice = self.load_invoice(invoice_id).await?;
        Ok(Self::to_dto(&invoice))
    }

    /// List all invoices regardless of status, newest first
    pub async fn list_invoices(&self, page: u32, per_page: u32) -> Result<Paged<InvoiceSummaryDto>> {
        let invoices = self.invoice_repo.find_all(page, per_page).await?;
        let total = self.invoice_repo.count().await?;

        Ok(Self::to_page(invoices, page, per_page, total))
    }

    /// List invoices with a given status, newest first
    pub async fn list_invoices_by_status(
        &self,
        status: InvoiceStatus,
        page: u32,
        per_page: u32,
    ) -> Result<Paged<InvoiceSummaryDto>> {
        let invoices = self
            .invoice_repo
            .find_by_status(status, page, per_page)
            .await?;
        let total = self.invoice_repo.count_by_status(status).await?;

        Ok(Self::to_page(invoices, page, per_page, total))
    }

    /// List invoices for a customer, newest first
    pub async fn list_invoices_by_customer(
        &self,
        customer_id: Uuid,
        page: u32,
        per_page: u32,
    ) -> Result<Paged<InvoiceSummaryDto>> {
        let invoices = self
            .invoice_repo
            .find_by_customer(customer_id, page, per_page)
            .await?;
        let total = self.invoice_repo.count_by_customer(customer_id).await?;

        Ok(Self::to_page(invoices, page, per_page, total))
    }

    async fn load_invoice(&self, invoice_id: Uuid) -> Result<Invoice> {
        self.invoice_repo
            .find_by_id(invoice_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Invoice with ID {} not found", invoice_id))
            })
    }

    fn to_page(
        invoices: Vec<Invoice>,
        page: u32,
        per_page: u32,
        total: u64,
    ) -> Paged<InvoiceSummaryDto> {
        let summaries = invoices.iter().map(Self::to_summary_dto).collect();
        Paged::new(summaries, page, per_page, total)
    }

    fn to_dto(invoice: &Invoice) -> InvoiceDto {
        InvoiceDto {
            id: invoice.id(),
            customer_id: invoice.customer_id(),
            status: invoice.status(),
            issue_date: invoice.issue_date(),
            due_date: invoice.due_date(),
            payment_plan: invoice.payment_plan(),
            discount_code: invoice.discount_code().map(str::to_string),
            discount_amount: invoice.discount_amount(),
            subtotal: invoice.calculate_subtotal(),
            total_amount: invoice.calculate_total(),
            balance: invoice.calculate_balance(),
            line_items: invoice
                .line_items()
                .iter()
                .map(|item| LineItemDto {
                    id: item.id(),
                    description: item.description().to_string(),
                    quantity: item.quantity(),
                    unit_price: item.unit_price(),
                    total: item.total(),
                })
                .collect(),
            payments: invoice
                .payments()
                .iter()
                .map(|payment| PaymentDto {
                    id: payment.id(),
                    invoice_id: payment.invoice_id(),
                    amount: payment.amount(),
                    payment_date: payment.payment_date(),
                    payment_method: payment.payment_method().map(str::to_string),
                    created_at: payment.created_at(),
                })
                .collect(),
            created_at: invoice.created_at(),
            updated_at: invoice.updated_at(),
        }
    }

    fn to_summary_dto(invoice: &Invoice) -> InvoiceSummaryDto {
        InvoiceSummaryDto {
            id: invoice.id(),
            customer_id: invoice.customer_id(),
            status: invoice.status(),
            issue_date: invoice.issue_date(),
            due_date: invoice.due_date(),
            total_amount: invoice.calculate_total(),
            balance: invoice.calculate_balance(),
        }
    }
}
