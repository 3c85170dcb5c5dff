pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Payment, PaymentDto, RecordPaymentCommand};
pub use repositories::{MemoryPaymentRepository, PaymentRepository};
pub use services::PaymentService;
