// Property-based tests for derived invoice amounts
//
// Subtotal, total and balance are never stored; these properties pin the
// laws they must satisfy for any mix of line items, discount and
// payments:
// - subtotal = sum of line item totals
// - total = max(0, subtotal - discount)
// - balance = total - sum of applied payments, never negative

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use invoicekit::invoices::{Invoice, InvoiceStatus, LineItem, PaymentPlan};
use invoicekit::payments::Payment;

fn test_invoice() -> Invoice {
    Invoice::create(
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2025, 2, 15).unwrap(),
        Some(PaymentPlan::Full),
    )
}

fn cents(raw: u32) -> Decimal {
    Decimal::new(raw as i64, 2)
}

fn payment_of(invoice_id: Uuid, amount: Decimal) -> Payment {
    Payment::reconstruct(
        Uuid::new_v4(),
        invoice_id,
        amount,
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        None,
        Utc::now(),
    )
}

proptest! {
    /// Subtotal is the exact sum of line item totals, unrounded
    #[test]
    fn test_subtotal_is_sum_of_line_totals(
        items in prop::collection::vec((1u32..1_000, 1u32..100_000), 1..8),
    ) {
        let mut invoice = test_invoice();
        let mut expected = Decimal::ZERO;

        for (quantity, unit_price_cents) in items {
            let quantity = Decimal::from(quantity);
            let unit_price = cents(unit_price_cents);
            expected += quantity * unit_price;
            invoice
                .add_line_item(LineItem::new("Item", quantity, unit_price).unwrap())
                .unwrap();
        }

        prop_assert_eq!(invoice.calculate_subtotal(), expected);
        // Recomputing without mutation yields the same value
        prop_assert_eq!(invoice.calculate_subtotal(), expected);
    }

    /// Total equals subtotal minus discount, floored at zero
    #[test]
    fn test_total_law(
        unit_price_cents in 1u32..10_000_000,
        percent in 0u32..=100,
    ) {
        let mut invoice = test_invoice();
        invoice
            .add_line_item(LineItem::new("Item", Decimal::ONE, cents(unit_price_cents)).unwrap())
            .unwrap();
        invoice.apply_discount("CODE", Decimal::from(percent)).unwrap();

        let expected =
            (invoice.calculate_subtotal() - invoice.discount_amount()).max(Decimal::ZERO);
        prop_assert_eq!(invoice.calculate_total(), expected);
        prop_assert!(invoice.calculate_total() >= Decimal::ZERO);
        prop_assert!(invoice.discount_amount() >= Decimal::ZERO);
    }

    /// Balance tracks total minus applied payments and hits zero exactly
    /// when the invoice flips to paid
    #[test]
    fn test_balance_law(
        total_cents in 100u32..1_000_000,
        payment_cents in prop::collection::vec(1u32..500_000, 0..8),
    ) {
        let mut invoice = test_invoice();
        invoice
            .add_line_item(LineItem::new("Item", Decimal::ONE, cents(total_cents)).unwrap())
            .unwrap();
        invoice.mark_as_sent().unwrap();

        let total = invoice.calculate_total();
        let mut applied = Decimal::ZERO;

        for raw in payment_cents {
            let amount = cents(raw);
            // Overpayments are rejected without mutation; skip them here,
            // the boundary has its own test below
            if amount > invoice.calculate_balance() {
                continue;
            }
            invoice.apply_payment(payment_of(invoice.id(), amount)).unwrap();
            applied += amount;
        }

        prop_assert_eq!(invoice.calculate_balance(), total - applied);
        prop_assert!(invoice.calculate_balance() >= Decimal::ZERO);
        prop_assert_eq!(
            invoice.status() == InvoiceStatus::Paid,
            invoice.calculate_balance().is_zero()
        );
    }

    /// Every draft-only mutation is rejected once the invoice is sent
    #[test]
    fn test_sent_invoice_rejects_edits(unit_price_cents in 1u32..100_000) {
        let mut invoice = test_invoice();
        let item = LineItem::new("Item", Decimal::ONE, cents(unit_price_cents)).unwrap();
        let item_id = item.id();
        invoice.add_line_item(item).unwrap();
        invoice.mark_as_sent().unwrap();

        let extra = LineItem::new("Extra", Decimal::ONE, dec!(1)).unwrap();
        prop_assert!(invoice.add_line_item(extra).is_err());
        prop_assert!(invoice.remove_line_item(item_id).is_err());
        prop_assert!(invoice.apply_discount("SAVE15", dec!(15)).is_err());
        prop_assert!(invoice.remove_discount().is_err());
        prop_assert!(invoice
            .update_dates(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            )
            .is_err());
        prop_assert_eq!(invoice.line_items().len(), 1);
    }
}

mod unit_tests {
    use super::*;

    #[test]
    fn test_scenario_subtotal_and_discount() {
        // (10 x 100) + (5 x 200) = 2000; 15% off = 300.00; total 1700
        let mut invoice = test_invoice();
        invoice
            .add_line_item(LineItem::new("Widgets", dec!(10), dec!(100)).unwrap())
            .unwrap();
        invoice
            .add_line_item(LineItem::new("Gadgets", dec!(5), dec!(200)).unwrap())
            .unwrap();

        assert_eq!(invoice.calculate_subtotal(), dec!(2000));

        invoice.apply_discount("SAVE15", dec!(15)).unwrap();
        assert_eq!(invoice.discount_amount(), dec!(300.00));
        assert_eq!(invoice.calculate_total(), dec!(1700.00));
    }

    #[test]
    fn test_exact_payment_settles_invoice() {
        let mut invoice = test_invoice();
        invoice
            .add_line_item(LineItem::new("Services", dec!(1), dec!(1000)).unwrap())
            .unwrap();
        invoice.mark_as_sent().unwrap();

        invoice
            .apply_payment(payment_of(invoice.id(), dec!(600)))
            .unwrap();
        assert_eq!(invoice.calculate_balance(), dec!(400));
        assert_eq!(invoice.status(), InvoiceStatus::Sent);

        invoice
            .apply_payment(payment_of(invoice.id(), dec!(400)))
            .unwrap();
        assert_eq!(invoice.calculate_balance(), dec!(0));
        assert_eq!(invoice.status(), InvoiceStatus::Paid);
    }

    #[test]
    fn test_one_cent_overpayment_rejected() {
        let mut invoice = test_invoice();
        invoice
            .add_line_item(LineItem::new("Services", dec!(1), dec!(500)).unwrap())
            .unwrap();
        invoice.mark_as_sent().unwrap();

        let result = invoice.apply_payment(payment_of(invoice.id(), dec!(500.01)));

        assert!(result.is_err());
        assert!(invoice.payments().is_empty());
        assert_eq!(invoice.calculate_balance(), dec!(500));
        assert_eq!(invoice.status(), InvoiceStatus::Sent);
    }

    #[test]
    fn test_unrounded_line_totals_flow_into_subtotal() {
        // 3 x 33.335 = 100.005 stays unrounded in the subtotal
        let mut invoice = test_invoice();
        invoice
            .add_line_item(LineItem::new("Precise", dec!(3), dec!(33.335)).unwrap())
            .unwrap();

        assert_eq!(invoice.calculate_subtotal(), dec!(100.005));
    }
}
