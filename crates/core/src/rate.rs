//! Fractional tax and discount rates.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::format;
use crate::value_object::ValueObject;

/// Fractional tax rate applied multiplicatively (`0.19` = 19%).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

/// Fractional discount rate applied multiplicatively (`0.12` = 12%).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(Decimal);

impl TaxRate {
    pub const ZERO: TaxRate = TaxRate(Decimal::ZERO);

    /// Unchecked construction. Out-of-range rates are not rejected; the
    /// pricing formulas simply produce the numerically defined result.
    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn rate(&self) -> Decimal {
        self.0
    }

    /// `1 + rate`, the factor a net price is multiplied by.
    pub fn gross_multiplier(&self) -> Decimal {
        Decimal::ONE + self.0
    }
}

impl DiscountRate {
    pub const ZERO: DiscountRate = DiscountRate(Decimal::ZERO);

    /// Unchecked construction, same garbage-in/garbage-out contract as
    /// [`TaxRate::new`].
    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn rate(&self) -> Decimal {
        self.0
    }

    /// `1 - rate`, the factor a gross sum is multiplied by.
    pub fn net_multiplier(&self) -> Decimal {
        Decimal::ONE - self.0
    }
}

impl ValueObject for TaxRate {}
impl ValueObject for DiscountRate {}

impl core::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format::percent(self.0))
    }
}

impl core::fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format::percent(self.0))
    }
}

fn parse_fraction(s: &str, what: &str) -> Result<Decimal, DomainError> {
    let rate = Decimal::from_str(s.trim())
        .map_err(|e| DomainError::validation(format!("{what} {s:?}: {e}")))?;
    if !(Decimal::ZERO..=Decimal::ONE).contains(&rate) {
        return Err(DomainError::validation(format!(
            "{what} must be within [0, 1], got {rate}"
        )));
    }
    Ok(rate)
}

// Parsing applies the basic field constraint (rates are fractions in [0, 1]);
// this only guards external input, programmatic construction stays unchecked.
impl FromStr for TaxRate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fraction(s, "tax rate").map(Self)
    }
}

impl FromStr for DiscountRate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fraction(s, "discount rate").map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn multipliers_bracket_one() {
        assert_eq!(TaxRate::new(dec!(0.19)).gross_multiplier(), dec!(1.19));
        assert_eq!(DiscountRate::new(dec!(0.12)).net_multiplier(), dec!(0.88));
        assert_eq!(TaxRate::ZERO.gross_multiplier(), Decimal::ONE);
        assert_eq!(DiscountRate::ZERO.net_multiplier(), Decimal::ONE);
    }

    #[test]
    fn displays_as_percentage() {
        assert_eq!(TaxRate::new(dec!(0.19)).to_string(), "19.00%");
        assert_eq!(DiscountRate::new(dec!(0.12)).to_string(), "12.00%");
    }

    #[test]
    fn parsing_enforces_the_unit_interval() {
        assert_eq!("0.19".parse::<TaxRate>().unwrap(), TaxRate::new(dec!(0.19)));
        assert_eq!("1".parse::<DiscountRate>().unwrap(), DiscountRate::new(dec!(1)));

        for bad in ["-0.1", "1.01", "diecinueve"] {
            let err = bad.parse::<TaxRate>().unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                other => panic!("expected Validation for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unchecked_construction_allows_garbage() {
        // Garbage in, garbage out: formulas still produce defined numbers.
        assert_eq!(TaxRate::new(dec!(-0.5)).gross_multiplier(), dec!(0.5));
        assert_eq!(DiscountRate::new(dec!(1.5)).net_multiplier(), dec!(-0.5));
    }
}
