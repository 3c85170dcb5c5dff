pub mod models;
pub mod repositories;
pub mod services;

pub use models::{
    CreatePaymentScheduleCommand, InstallmentDto, InstallmentStatus, MarkInstallmentPaidCommand,
    PaymentSchedule,
};
pub use repositories::{MemoryPaymentScheduleRepository, PaymentScheduleRepository};
pub use services::{InstallmentService, ScheduleCalculator};
