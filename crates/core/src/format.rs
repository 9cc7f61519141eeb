//! Display formatting for the three presentation kinds the domain needs:
//! currency, percentage, and two-decimal quantities.
//!
//! All three round to two fraction digits with **round-half-even** (banker's
//! rounding) so display totals stay reproducible. The `Display` impls on
//! [`crate::Money`] and the rate types delegate here instead of chaining
//! through any inherited rendering.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency with two fraction digits, `$` prefix, and thousands grouping,
/// e.g. `$54,740.00` or `-$12.50`.
pub fn currency(amount: Decimal) -> String {
    let (negative, units, cents) = split_two_decimals(amount);
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{cents:02}", group_thousands(&units))
}

/// Fractional rate as a percentage with two fraction digits, e.g. `19.00%`.
pub fn percent(rate: Decimal) -> String {
    let (negative, units, cents) = split_two_decimals(rate * Decimal::ONE_HUNDRED);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{units}.{cents:02}%")
}

/// Plain quantity with two fraction digits, e.g. `0.54`.
pub fn quantity(value: Decimal) -> String {
    let (negative, units, cents) = split_two_decimals(value);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{units}.{cents:02}")
}

/// Round to two places (half-even) and split into sign, whole units, and the
/// two-digit fraction. Units stay a string so arbitrarily large amounts keep
/// working.
fn split_two_decimals(value: Decimal) -> (bool, String, u32) {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();
    let units = abs.trunc();
    let cents = ((abs - units) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u32()
        .unwrap_or(0);
    (negative, units.to_string(), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
