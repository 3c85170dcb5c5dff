mod installment_service;
mod schedule_calculator;

pub use installment_service::InstallmentService;
pub use schedule_calculator::ScheduleCalculator;
