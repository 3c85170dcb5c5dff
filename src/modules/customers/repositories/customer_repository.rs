// CustomerRepository port and in-memory adapter
//
// Customers live outside this crate; the only thing invoice creation
// needs is an existence check. The memory adapter holds a bare ID set
// and is seeded through `insert`.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;

/// Read-only port onto the customer registry
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Check whether a customer exists
    async fn exists_by_id(&self, id: Uuid) -> Result<bool>;
}

/// In-memory customer registry
#[derive(Debug, Default)]
pub struct MemoryCustomerRepository {
    customers: RwLock<HashSet<Uuid>>,
}

impl MemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer ID
    pub async fn insert(&self, id: Uuid) {
        let mut customers = self.customers.write().await;
        customers.insert(id);
    }
}

#[async_trait]
impl CustomerRepository for MemoryCustomerRepository {
    async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
        let customers = self.customers.read().await;
        Ok(customers.contains(&id))
    }
}
