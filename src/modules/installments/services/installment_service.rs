// Business logic for Pay-in-4 installment schedules
//
// Covers schedule creation when an invoice is sent, the payment matcher
// that flips installments to paid, and the schedule queries.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::{money, Result};
use crate::modules::installments::models::{
    CreatePaymentScheduleCommand, InstallmentDto, MarkInstallmentPaidCommand, PaymentSchedule,
};
use crate::modules::installments::repositories::PaymentScheduleRepository;
use crate::modules::installments::services::ScheduleCalculator;

/// Service for installment schedule business logic
pub struct InstallmentService {
    schedule_repo: Arc<dyn PaymentScheduleRepository>,
}

impl InstallmentService {
    pub fn new(schedule_repo: Arc<dyn PaymentScheduleRepository>) -> Self {
        Self { schedule_repo }
    }

    /// Create the four bi-weekly installments for an invoice
    ///
    /// The amounts come from the calculator: total / 4 rounded to cents
    /// half-up, with the fourth installment absorbing the remainder.
    pub async fn create_schedule(&self, command: CreatePaymentScheduleCommand) -> Result<()> {
        let schedules = ScheduleCalculator::calculate_schedules(
            command.invoice_id,
            command.total_amount,
            command.start_date,
        )?;

        self.schedule_repo.save_all(&schedules).await?;

        info!(
            invoice_id = %command.invoice_id,
            total_amount = %command.total_amount,
            first_due = %command.start_date,
            "Payment schedule created"
        );

        Ok(())
    }

    /// Match a recorded payment against the next pending installment
    ///
    /// Finds the lowest-numbered pending installment and marks it paid
    /// when the payment amount matches it to within a cent. Everything
    /// else is a silent no-op: no schedule, all installments settled, or
    /// an amount that does not line up (partial payments and overpayments
    /// are allowed, they just do not advance the schedule).
    pub async fn mark_installment_paid(&self, command: MarkInstallmentPaidCommand) -> Result<()> {
        let schedules = self
            .schedule_repo
            .find_by_invoice_id(command.invoice_id)
            .await?;

        if schedules.is_empty() {
            return Ok(());
        }

        let next_pending = schedules
            .into_iter()
            .filter(PaymentSchedule::is_pending)
            .min_by_key(|s| s.installment_number());

        let Some(mut installment) = next_pending else {
            return Ok(());
        };

        // Normalize both sides to cents before comparing
        let payment_amount = money::round_money(command.payment_amount);
        let installment_amount = money::round_money(installment.amount());

        let difference = (payment_amount - installment_amount).abs();
        if difference > money::smallest_unit() {
            debug!(
                invoice_id = %command.invoice_id,
                payment_amount = %payment_amount,
                installment_amount = %installment_amount,
                "Payment does not match next installment, leaving schedule unchanged"
            );
            return Ok(());
        }

        installment.mark_as_paid()?;
        self.schedule_repo.save(&installment).await?;

        info!(
            invoice_id = %command.invoice_id,
            installment_number = installment.installment_number(),
            "Installment marked as paid"
        );

        Ok(())
    }

    /// Get the full schedule for an invoice, ordered by installment number
    ///
    /// Invoices without a schedule yield an empty list.
    pub async fn get_schedule(&self, invoice_id: Uuid) -> Result<Vec<InstallmentDto>> {
        let schedules = self.schedule_repo.find_by_invoice_id(invoice_id).await?;
        Ok(schedules.iter().map(Self::to_dto).collect())
    }

    /// List pending or overdue installments due on or before `up_to`
    pub async fn list_upcoming_installments(&self, up_to: NaiveDate) -> Result<Vec<InstallmentDto>> {
        let schedules = self.schedule_repo.find_upcoming_installments(up_to).await?;
        Ok(schedules.iter().map(Self::to_dto).collect())
    }

    fn to_dto(schedule: &PaymentSchedule) -> InstallmentDto {
        InstallmentDto {
            id: schedule.id(),
            invoice_id: schedule.invoice_id(),
            installment_number: schedule.installment_number(),
            amount: schedule.amount(),
            due_date: schedule.due_date(),
            status: schedule.status(),
            created_at: schedule.created_at(),
        }
    }
}
