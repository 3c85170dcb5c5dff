// DiscountCodeRepository port and in-memory adapter
//
// Codes are keyed by their canonical upper-case form, so lookups are
// case-insensitive regardless of how the caller spells the code.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::discounts::models::DiscountCode;

/// Persistence port for discount codes
#[async_trait]
pub trait DiscountCodeRepository: Send + Sync {
    /// Save a discount code, inserting or replacing by canonical code
    async fn save(&self, code: &DiscountCode) -> Result<()>;

    /// Find a code, case-insensitively
    async fn find_by_code(&self, code: &str) -> Result<Option<DiscountCode>>;

    /// Check whether a code exists, case-insensitively
    async fn exists_by_code(&self, code: &str) -> Result<bool>;

    /// List every code, active or not
    async fn find_all(&self) -> Result<Vec<DiscountCode>>;
}

/// In-memory discount code store
#[derive(Debug, Default)]
pub struct MemoryDiscountCodeRepository {
    codes: RwLock<HashMap<String, DiscountCode>>,
}

impl MemoryDiscountCodeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn key_for(code: &str) -> String {
        code.trim().to_uppercase()
    }
}

#[async_trait]
impl DiscountCodeRepository for MemoryDiscountCodeRepository {
    async fn save(&self, code: &DiscountCode) -> Result<()> {
        let mut codes = self.codes.write().await;
        codes.insert(Self::key_for(code.code()), code.clone());
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<DiscountCode>> {
        let codes = self.codes.read().await;
        Ok(codes.get(&Self::key_for(code)).cloned())
    }

    async fn exists_by_code(&self, code: &str) -> Result<bool> {
        let codes = self.codes.read().await;
        Ok(codes.contains_key(&Self::key_for(code)))
    }

    async fn find_all(&self) -> Result<Vec<DiscountCode>> {
        let codes = self.codes.read().await;
        let mut all: Vec<DiscountCode> = codes.values().cloned().collect();
        all.sort_by(|a, b| a.code().cmp(b.code()));
        Ok(all)
    }
}
