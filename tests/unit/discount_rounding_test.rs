// Tests for discount percentage rounding
//
// Discount amounts are rounded to cents with half-up rounding: exact
// midpoints move away from zero, matching how the amounts appear on the
// issued invoice. These tests pin the midpoint behavior and the
// agreement between the code's own calculation and the snapshot taken
// by the invoice.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use invoicekit::discounts::DiscountCode;
use invoicekit::invoices::{Invoice, LineItem};

fn cents(raw: u32) -> Decimal {
    Decimal::new(raw as i64, 2)
}

fn draft_invoice() -> Invoice {
    Invoice::create(
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
        None,
    )
}

proptest! {
    /// A discount amount never goes negative, never exceeds the rounded
    /// subtotal, and always lands on whole cents
    #[test]
    fn test_discount_amount_bounds(
        subtotal_cents in 1u32..100_000_000,
        percent in 0u32..=100,
    ) {
        let code = DiscountCode::create("BOUNDS", Decimal::from(percent)).unwrap();
        let subtotal = cents(subtotal_cents);

        let amount = code.calculate_discount_amount(subtotal);

        prop_assert!(amount >= Decimal::ZERO);
        prop_assert!(amount <= subtotal);
        prop_assert!(amount.scale() <= 2);
    }

    /// The snapshot the invoice takes agrees with the code's own math
    #[test]
    fn test_invoice_snapshot_matches_code_calculation(
        subtotal_cents in 1u32..10_000_000,
        percent in 0u32..=100,
    ) {
        let code = DiscountCode::create("MATCH", Decimal::from(percent)).unwrap();
        let mut invoice = draft_invoice();
        invoice
            .add_line_item(LineItem::new("Item", Decimal::ONE, cents(subtotal_cents)).unwrap())
            .unwrap();

        invoice.apply_discount(code.code(), code.discount_percent()).unwrap();

        prop_assert_eq!(
            invoice.discount_amount(),
            code.calculate_discount_amount(invoice.calculate_subtotal())
        );
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_midpoint_rounds_up_not_to_even() {
        // 5% of 0.10 is 0.005; half-up gives 0.01 where banker's
        // rounding would give 0.00
        let code = DiscountCode::create("SAVE5", dec!(5)).unwrap();

        assert_eq!(code.calculate_discount_amount(dec!(0.10)), dec!(0.01));
    }

    #[test]
    fn test_quarter_cent_midpoint() {
        // 25% of 0.10 is 0.025 -> 0.03
        let code = DiscountCode::create("QUARTER", dec!(25)).unwrap();

        assert_eq!(code.calculate_discount_amount(dec!(0.10)), dec!(0.03));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        // 15% of 100.03 is 15.0045 -> 15.00
        let code = DiscountCode::create("SAVE15", dec!(15)).unwrap();

        assert_eq!(code.calculate_discount_amount(dec!(100.03)), dec!(15.00));
    }

    #[test]
    fn test_zero_percent_is_valid_and_free() {
        let code = DiscountCode::create("ZERO", Decimal::ZERO).unwrap();

        assert_eq!(code.discount_percent(), Decimal::ZERO);
        assert_eq!(code.calculate_discount_amount(dec!(500)), Decimal::ZERO);
    }

    #[test]
    fn test_hundred_percent_is_valid() {
        let code = DiscountCode::create("COMP", dec!(100)).unwrap();

        assert_eq!(code.calculate_discount_amount(dec!(123.45)), dec!(123.45));
    }

    #[test]
    fn test_percent_out_of_range_rejected() {
        assert!(DiscountCode::create("TOOMUCH", dec!(100.01)).is_err());
        assert!(DiscountCode::create("NEGATIVE", dec!(-1)).is_err());
    }

    #[test]
    fn test_full_discount_on_unrounded_subtotal_floors_total() {
        // Subtotal 100.005 stays unrounded; a 100% discount snapshots
        // 100.01, so the raw difference is -0.005 and the total floors
        // at zero
        let mut invoice = draft_invoice();
        invoice
            .add_line_item(LineItem::new("Precise", dec!(3), dec!(33.335)).unwrap())
            .unwrap();

        invoice.apply_discount("COMP", dec!(100)).unwrap();

        assert_eq!(invoice.discount_amount(), dec!(100.01));
        assert_eq!(invoice.calculate_total(), Decimal::ZERO);
    }

    #[test]
    fn test_snapshot_survives_later_item_edits() {
        let mut invoice = draft_invoice();
        invoice
            .add_line_item(LineItem::new("Original", dec!(1), dec!(200)).unwrap())
            .unwrap();
        invoice.apply_discount("SAVE15", dec!(15)).unwrap();
        assert_eq!(invoice.discount_amount(), dec!(30.00));

        invoice
            .add_line_item(LineItem::new("Added later", dec!(1), dec!(800)).unwrap())
            .unwrap();

        // Still 15% of the subtotal at apply time, not of 1000
        assert_eq!(invoice.discount_amount(), dec!(30.00));
        assert_eq!(invoice.calculate_total(), dec!(970.00));
    }
}
