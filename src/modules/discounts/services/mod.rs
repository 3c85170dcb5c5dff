mod discount_service;

pub use discount_service::DiscountService;
