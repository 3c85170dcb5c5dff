// Pay-in-4 schedule calculator
//
// Splits an invoice total into four bi-weekly installments. The base
// amount is total / 4 rounded to cents half-up; whatever rounding gained
// or lost goes into the fourth installment so the four always sum back
// to the exact total.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::core::{money, AppError, Result};
use crate::modules::installments::models::PaymentSchedule;

/// Number of installments in a Pay-in-4 plan
pub const INSTALLMENT_COUNT: i32 = 4;

/// Gap between consecutive installment due dates
const INSTALLMENT_INTERVAL_WEEKS: i64 = 2;

/// Calculator for Pay-in-4 installment schedules
pub struct ScheduleCalculator;

impl ScheduleCalculator {
    /// Build the four installments for an invoice
    ///
    /// # Arguments
    /// * `invoice_id` - Parent invoice ID
    /// * `total_amount` - Invoice total to split
    /// * `start_date` - Due date of the first installment; the rest
    ///   follow every two weeks
    pub fn calculate_schedules(
        invoice_id: Uuid,
        total_amount: Decimal,
        start_date: NaiveDate,
    ) -> Result<Vec<PaymentSchedule>> {
        let base_amount = money::round_money(total_amount / Decimal::from(INSTALLMENT_COUNT));
        let remainder = total_amount - base_amount * Decimal::from(INSTALLMENT_COUNT);

        debug!(
            "Splitting {} into {} installments of {} (remainder {})",
            total_amount, INSTALLMENT_COUNT, base_amount, remainder
        );

        let mut schedules = Vec::with_capacity(INSTALLMENT_COUNT as usize);
        let mut due_date = start_date;

        for number in 1..=INSTALLMENT_COUNT {
            let amount = if number == INSTALLMENT_COUNT {
                // Last installment absorbs the rounding remainder
                base_amount + remainder
            } else {
                base_amount
            };

            schedules.push(PaymentSchedule::create(invoice_id, number, amount, due_date)?);

            due_date = due_date
                .checked_add_signed(Duration::weeks(INSTALLMENT_INTERVAL_WEEKS))
                .ok_or_else(|| AppError::validation("Failed to calculate installment due date"))?;
        }

        Ok(schedules)
    }
}
