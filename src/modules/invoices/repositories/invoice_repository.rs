// InvoiceRepository port and in-memory adapter
//
// The port is what the services see; persistence is behind it. The
// in-memory adapter backs the test suite and any embedded use. Listings
// are ordered by creation time, newest first, with a 0-based page index.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::invoices::models::{Invoice, InvoiceStatus};

/// Persistence port for the invoice aggregate
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Save an invoice, inserting or replacing by ID
    ///
    /// Last write wins; there is no compare-and-swap. Two callers that
    /// load, mutate and save the same invoice concurrently can lose one
    /// of the mutations.
    async fn save(&self, invoice: &Invoice) -> Result<()>;

    /// Find an invoice by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>>;

    /// Find invoices with a given status, newest first
    async fn find_by_status(
        &self,
        status: InvoiceStatus,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Invoice>>;

    /// Count invoices with a given status
    async fn count_by_status(&self, status: InvoiceStatus) -> Result<u64>;

    /// Find invoices for a customer, newest first
    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Invoice>>;

    /// Count invoices for a customer
    async fn count_by_customer(&self, customer_id: Uuid) -> Result<u64>;

    /// Find all invoices regardless of status, newest first
    async fn find_all(&self, page: u32, per_page: u32) -> Result<Vec<Invoice>>;

    /// Count all invoices
    async fn count(&self) -> Result<u64>;

    /// Check whether an invoice exists
    async fn exists_by_id(&self, id: Uuid) -> Result<bool>;
}

/// In-memory invoice store
#[derive(Debug, Default)]
pub struct MemoryInvoiceRepository {
    invoices: RwLock<HashMap<Uuid, Invoice>>,
}

impl MemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn page_of(mut invoices: Vec<Invoice>, page: u32, per_page: u32) -> Vec<Invoice> {
        // Newest first; ID as tie-breaker so paging is stable
        invoices.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(&b.id()))
        });
        invoices
            .into_iter()
            .skip(page as usize * per_page as usize)
            .take(per_page as usize)
            .collect()
    }
}

#[async_trait]
impl InvoiceRepository for MemoryInvoiceRepository {
    async fn save(&self, invoice: &Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        invoices.insert(invoice.id(), invoice.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(&id).cloned())
    }

    async fn find_by_status(
        &self,
        status: InvoiceStatus,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        let matching = invoices
            .values()
            .filter(|i| i.status() == status)
            .cloned()
            .collect();
        Ok(Self::page_of(matching, page, per_page))
    }

    async fn count_by_status(&self, status: InvoiceStatus) -> Result<u64> {
        let invoices = self.invoices.read().await;
        Ok(invoices.values().filter(|i| i.status() == status).count() as u64)
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        let matching = invoices
            .values()
            .filter(|i| i.customer_id() == customer_id)
            .cloned()
            .collect();
        Ok(Self::page_of(matching, page, per_page))
    }

    async fn count_by_customer(&self, customer_id: Uuid) -> Result<u64> {
        let invoices = self.invoices.read().await;
        Ok(invoices
            .values()
            .filter(|i| i.customer_id() == customer_id)
            .count() as u64)
    }

    async fn find_all(&self, page: u32, per_page: u32) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        let all = invoices.values().cloned().collect();
        Ok(Self::page_of(all, page, per_page))
    }

    async fn count(&self) -> Result<u64> {
        let invoices = self.invoices.read().await;
        Ok(invoices.len() as u64)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
        let invoices = self.invoices.read().await;
        Ok(invoices.contains_key(&id))
    }
}
