mod payment_schedule_repository;

pub use payment_schedule_repository::{MemoryPaymentScheduleRepository, PaymentScheduleRepository};
