mod commands;
mod payment_schedule;

pub use commands::{CreatePaymentScheduleCommand, InstallmentDto, MarkInstallmentPaidCommand};
pub use payment_schedule::{InstallmentStatus, PaymentSchedule};
