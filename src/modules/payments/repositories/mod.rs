mod payment_repository;

pub use payment_repository::{MemoryPaymentRepository, PaymentRepository};
