mod commands;
mod payment;

pub use commands::{PaymentDto, RecordPaymentCommand};
pub use payment::Payment;
