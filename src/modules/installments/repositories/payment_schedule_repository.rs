// PaymentScheduleRepository port and in-memory adapter
//
// Schedules always come back ordered: by installment number for a single
// invoice, by due date for the upcoming view. Upcoming means any pending
// or overdue installment due on or before the given date.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::installments::models::{InstallmentStatus, PaymentSchedule};

/// Persistence port for installment schedules
#[async_trait]
pub trait PaymentScheduleRepository: Send + Sync {
    /// Save a single installment, inserting or replacing by ID
    async fn save(&self, schedule: &PaymentSchedule) -> Result<()>;

    /// Save a batch of installments
    async fn save_all(&self, schedules: &[PaymentSchedule]) -> Result<()>;

    /// Find all installments for an invoice, ordered by installment number
    async fn find_by_invoice_id(&self, invoice_id: Uuid) -> Result<Vec<PaymentSchedule>>;

    /// Find pending or overdue installments due on or before `up_to`,
    /// ordered by due date
    async fn find_upcoming_installments(&self, up_to: NaiveDate) -> Result<Vec<PaymentSchedule>>;

    /// Delete all installments for an invoice
    async fn delete_by_invoice_id(&self, invoice_id: Uuid) -> Result<()>;
}

/// In-memory installment store
#[derive(Debug, Default)]
pub struct MemoryPaymentScheduleRepository {
    schedules: RwLock<HashMap<Uuid, PaymentSchedule>>,
}

impl MemoryPaymentScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentScheduleRepository for MemoryPaymentScheduleRepository {
    async fn save(&self, schedule: &PaymentSchedule) -> Result<()> {
        let mut schedules = self.schedules.write().await;
        schedules.insert(schedule.id(), schedule.clone());
        Ok(())
    }

    async fn save_all(&self, batch: &[PaymentSchedule]) -> Result<()> {
        let mut schedules = self.schedules.write().await;
        for schedule in batch {
            schedules.insert(schedule.id(), schedule.clone());
        }
        Ok(())
    }

    async fn find_by_invoice_id(&self, invoice_id: Uuid) -> Result<Vec<PaymentSchedule>> {
        let schedules = self.schedules.read().await;
        let mut matching: Vec<PaymentSchedule> = schedules
            .values()
            .filter(|s| s.invoice_id() == invoice_id)
            .cloned()
            .collect();
        matching.sort_by_key(|s| s.installment_number());
        Ok(matching)
    }

    async fn find_upcoming_installments(&self, up_to: NaiveDate) -> Result<Vec<PaymentSchedule>> {
        let schedules = self.schedules.read().await;
        let mut matching: Vec<PaymentSchedule> = schedules
            .values()
            .filter(|s| {
                matches!(
                    s.status(),
                    InstallmentStatus::Pending | InstallmentStatus::Overdue
                ) && s.due_date() <= up_to
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.due_date()
                .cmp(&b.due_date())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(matching)
    }

    async fn delete_by_invoice_id(&self, invoice_id: Uuid) -> Result<()> {
        let mut schedules = self.schedules.write().await;
        schedules.retain(|_, s| s.invoice_id() != invoice_id);
        Ok(())
    }
}
