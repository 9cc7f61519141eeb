//! Decimal money value object.
//!
//! All monetary amounts are `rust_decimal::Decimal` — never floating point —
//! so sums and tax/discount multiplications stay exact until display rounding.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::format;
use crate::rate::{DiscountRate, TaxRate};
use crate::value_object::ValueObject;

/// A monetary amount in the base currency unit.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Gross amount after applying a tax rate: `amount * (1 + rate)`.
    pub fn with_tax(self, rate: TaxRate) -> Money {
        Money(self.0 * rate.gross_multiplier())
    }

    /// Amount after applying a discount rate: `amount * (1 - rate)`.
    pub fn less_discount(self, rate: DiscountRate) -> Money {
        Money(self.0 * rate.net_multiplier())
    }

    /// Rounded to two fraction digits, half-even (the display convention).
    pub fn rounded(self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        )
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rhs: Decimal) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format::currency(self.0))
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| DomainError::invalid_amount(format!("{s:?}: {e}")))?;
        Ok(Money(amount))
    }
}
