pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ApplyDiscountCommand, DiscountCode, DiscountCodeDto, DiscountCodeValidationDto};
pub use repositories::{DiscountCodeRepository, MemoryDiscountCodeRepository};
pub use services::DiscountService;
