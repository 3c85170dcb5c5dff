// ItemRepository port and in-memory adapter
//
// The catalog is managed elsewhere; this crate only ever reads from it
// when a line item is added by catalog reference.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::items::models::CatalogItem;

/// Read-only port onto the item catalog
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find a catalog item by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CatalogItem>>;
}

/// In-memory item catalog
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    items: RwLock<HashMap<Uuid, CatalogItem>>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item into the catalog
    pub async fn insert(&self, item: CatalogItem) {
        let mut items = self.items.write().await;
        items.insert(item.id(), item);
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CatalogItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }
}
