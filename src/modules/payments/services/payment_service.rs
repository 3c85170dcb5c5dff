// Business logic for recording and querying payments
//
// Recording a payment touches two aggregates: the payment itself and the
// invoice it settles. The invoice enforces the balance rules; this
// service wires the two together and nudges the installment schedule
// when the invoice is on a Pay-in-4 plan.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::installments::models::MarkInstallmentPaidCommand;
use crate::modules::installments::services::InstallmentService;
use crate::modules::invoices::models::{InvoiceStatus, PaymentPlan};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::payments::models::{Payment, PaymentDto, RecordPaymentCommand};
use crate::modules::payments::repositories::PaymentRepository;

/// Service for payment business logic
pub struct PaymentService {
    payment_repo: Arc<dyn PaymentRepository>,
    invoice_repo: Arc<dyn InvoiceRepository>,
    installment_service: Arc<InstallmentService>,
}

impl PaymentService {
    pub fn new(
        payment_repo: Arc<dyn PaymentRepository>,
        invoice_repo: Arc<dyn InvoiceRepository>,
        installment_service: Arc<InstallmentService>,
    ) -> Self {
        Self {
            payment_repo,
            invoice_repo,
            installment_service,
        }
    }

    /// Record a payment against a sent invoice
    ///
    /// The payment must not exceed the invoice balance; a payment that
    /// brings the balance to zero flips the invoice to paid. On Pay-in-4
    /// invoices the payment is also offered to the installment matcher.
    ///
    /// The balance check is not atomic with the save: two concurrent
    /// calls for the same invoice can both pass it. Callers that need
    /// stronger guarantees must serialize their writes.
    ///
    /// # Returns
    /// The ID of the recorded payment
    pub async fn record_payment(&self, command: RecordPaymentCommand) -> Result<Uuid> {
        let mut invoice = self
            .invoice_repo
            .find_by_id(command.invoice_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Invoice with ID {} not found", command.invoice_id))
            })?;

        if invoice.status() == InvoiceStatus::Draft {
            return Err(AppError::invalid_state(
                "Cannot record payment for invoice in draft status. Invoice must be sent first.",
            ));
        }

        let payment = Payment::create(
            command.invoice_id,
            command.amount,
            command.payment_date,
            command.payment_method.clone(),
        )?;
        payment.validate_against_invoice(&invoice)?;

        invoice.apply_payment(payment.clone())?;

        self.payment_repo.save(&payment).await?;
        self.invoice_repo.save(&invoice).await?;

        info!(
            payment_id = %payment.id(),
            invoice_id = %invoice.id(),
            amount = %payment.amount(),
            invoice_status = %invoice.status(),
            "Payment recorded"
        );

        if invoice.payment_plan() == PaymentPlan::PayInFour {
            self.installment_service
                .mark_installment_paid(MarkInstallmentPaidCommand {
                    invoice_id: command.invoice_id,
                    payment_amount: command.amount,
                })
                .await?;
        }

        Ok(payment.id())
    }

    /// Get a payment by ID
    pub async fn get_payment(&self, payment_id: Uuid) -> Result<PaymentDto> {
        let payment = self
            .payment_repo
            .find_by_id(payment_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Payment with ID {} not found", payment_id))
            })?;

        Ok(Self::to_dto(&payment))
    }

    /// List all payments recorded against an invoice, oldest first
    pub async fn list_payments_by_invoice(&self, invoice_id: Uuid) -> Result<Vec<PaymentDto>> {
        let payments = self.payment_repo.find_by_invoice_id(invoice_id).await?;
        Ok(payments.iter().map(Self::to_dto).collect())
    }

    fn to_dto(payment: &Payment) -> PaymentDto {
        PaymentDto {
            id: payment.id(),
            invoice_id: payment.invoice_id(),
            amount: payment.amount(),
            payment_date: payment.payment_date(),
            payment_method: payment.payment_method().map(str::to_string),
            created_at: payment.created_at(),
        }
    }
}
