pub mod models;
pub mod repositories;

pub use models::CatalogItem;
pub use repositories::{ItemRepository, MemoryItemRepository};
