// PaymentRepository port and in-memory adapter
//
// Payments are append-only in practice; save still upserts by ID so
// adapters stay symmetrical with the other repositories.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::payments::models::Payment;

/// Persistence port for payments
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Save a payment, inserting or replacing by ID
    async fn save(&self, payment: &Payment) -> Result<()>;

    /// Find a payment by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>>;

    /// Find all payments recorded against an invoice, oldest first
    async fn find_by_invoice_id(&self, invoice_id: Uuid) -> Result<Vec<Payment>>;
}

/// In-memory payment store
#[derive(Debug, Default)]
pub struct MemoryPaymentRepository {
    payments: RwLock<HashMap<Uuid, Payment>>,
}

impl MemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepository for MemoryPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<()> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.id(), payment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&id).cloned())
    }

    async fn find_by_invoice_id(&self, invoice_id: Uuid) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        let mut matching: Vec<Payment> = payments
            .values()
            .filter(|p| p.invoice_id() == invoice_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(matching)
    }
}
