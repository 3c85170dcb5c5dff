use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal scale used for all monetary amounts
pub const MONEY_DP: u32 = 2;

/// Rounds a monetary amount to cents, half-up.
///
/// All rounding in this crate goes through here. `Decimal::round_dp`
/// uses banker's rounding, which disagrees with the half-up convention
/// on midpoints (2.125 would become 2.12 instead of 2.13), so it must
/// not be used for money.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the smallest representable monetary unit (one cent)
pub fn smallest_unit() -> Decimal {
    Decimal::new(1, MONEY_DP)
}
