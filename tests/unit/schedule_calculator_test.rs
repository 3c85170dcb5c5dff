// Property-based tests for Pay-in-4 schedule splitting
//
// The four installments must always sum back to the exact invoice total:
// the base amount is total / 4 rounded to cents half-up and the fourth
// installment absorbs whatever the rounding gained or lost. Due dates
// run bi-weekly from the start date.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use invoicekit::installments::{InstallmentStatus, ScheduleCalculator};

fn cents(raw: u32) -> Decimal {
    Decimal::new(raw as i64, 2)
}

proptest! {
    /// Installments sum exactly to the total, with no drift from rounding
    #[test]
    fn test_installments_sum_to_total(total_cents in 100u32..10_000_000) {
        let total = cents(total_cents);
        let start = NaiveDate::from_ymd_opt(2025, 1, 29).unwrap();

        let schedules =
            ScheduleCalculator::calculate_schedules(Uuid::new_v4(), total, start).unwrap();

        let sum: Decimal = schedules.iter().map(|s| s.amount()).sum();
        prop_assert_eq!(sum, total);
        prop_assert_eq!(schedules.len(), 4);

        // First three share the rounded base; only the last may differ
        prop_assert_eq!(schedules[0].amount(), schedules[1].amount());
        prop_assert_eq!(schedules[1].amount(), schedules[2].amount());

        for schedule in &schedules {
            prop_assert!(schedule.amount() > Decimal::ZERO);
        }
    }

    /// Installments are numbered 1..=4 and due every two weeks
    #[test]
    fn test_biweekly_due_dates(offset_days in 0i64..730) {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset_days);

        let schedules =
            ScheduleCalculator::calculate_schedules(Uuid::new_v4(), dec!(400), start).unwrap();

        for (index, schedule) in schedules.iter().enumerate() {
            prop_assert_eq!(schedule.installment_number(), index as i32 + 1);
            prop_assert_eq!(schedule.due_date(), start + Duration::weeks(2 * index as i64));
            prop_assert_eq!(schedule.status(), InstallmentStatus::Pending);
        }
    }
}

mod unit_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_even_thousand_splits_into_four_250s() {
        let schedules = ScheduleCalculator::calculate_schedules(
            Uuid::new_v4(),
            dec!(1000.00),
            date(2024, 1, 1),
        )
        .unwrap();

        let amounts: Vec<Decimal> = schedules.iter().map(|s| s.amount()).collect();
        let due_dates: Vec<NaiveDate> = schedules.iter().map(|s| s.due_date()).collect();

        assert_eq!(
            amounts,
            vec![dec!(250.00), dec!(250.00), dec!(250.00), dec!(250.00)]
        );
        assert_eq!(
            due_dates,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 15),
                date(2024, 1, 29),
                date(2024, 2, 12),
            ]
        );
    }

    #[test]
    fn test_uneven_total_keeps_exact_sum() {
        // 1000.03 / 4 = 250.0075, rounds half-up to 250.01; the fourth
        // installment gives back the extra cent
        let schedules = ScheduleCalculator::calculate_schedules(
            Uuid::new_v4(),
            dec!(1000.03),
            date(2024, 1, 1),
        )
        .unwrap();

        let amounts: Vec<Decimal> = schedules.iter().map(|s| s.amount()).collect();
        assert_eq!(
            amounts,
            vec![dec!(250.01), dec!(250.01), dec!(250.01), dec!(250.00)]
        );

        let sum: Decimal = amounts.into_iter().sum();
        assert_eq!(sum, dec!(1000.03));
    }

    #[test]
    fn test_remainder_below_base_still_sums() {
        // 100.01 / 4 = 25.0025 -> base 25.00, last picks up the cent
        let schedules = ScheduleCalculator::calculate_schedules(
            Uuid::new_v4(),
            dec!(100.01),
            date(2024, 6, 1),
        )
        .unwrap();

        let amounts: Vec<Decimal> = schedules.iter().map(|s| s.amount()).collect();
        assert_eq!(
            amounts,
            vec![dec!(25.00), dec!(25.00), dec!(25.00), dec!(25.01)]
        );
    }

    #[test]
    fn test_zero_total_is_rejected() {
        let result = ScheduleCalculator::calculate_schedules(
            Uuid::new_v4(),
            Decimal::ZERO,
            date(2024, 1, 1),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let result = ScheduleCalculator::calculate_schedules(
            Uuid::new_v4(),
            dec!(-100),
            date(2024, 1, 1),
        );

        assert!(result.is_err());
    }
}
