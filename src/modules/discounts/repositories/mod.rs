mod discount_code_repository;

pub use discount_code_repository::{DiscountCodeRepository, MemoryDiscountCodeRepository};
