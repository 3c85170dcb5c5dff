mod commands;
mod discount_code;

pub use commands::{ApplyDiscountCommand, DiscountCodeDto, DiscountCodeValidationDto};
pub use discount_code::DiscountCode;
