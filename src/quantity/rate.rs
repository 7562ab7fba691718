use std::fmt::{Debug, Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Signed price delta in dollars per kilowatt-hour.
#[serde_as]
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Add,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    Serialize,
    Deserialize,
)]
pub struct KilowattHourRate(#[serde_as(as = "serde_with::DisplayFromStr")] pub Decimal);

impl KilowattHourRate {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Build the rate from a mantissa and a number of decimal places: `(-5, 2)` is `-0.05`.
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(mantissa: i64, scale: u32) -> Self {
        let magnitude = mantissa.unsigned_abs();
        Self(Decimal::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            0,
            mantissa < 0,
            scale,
        ))
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0.is_zero() {
            ""
        } else if self.0.is_sign_negative() {
            "-"
        } else {
            "+"
        };
        let cents = self.0.abs().round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{sign}${cents:.2}/kWh")
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}$/kWh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(KilowattHourRate(dec!(0.05)).to_string(), "+$0.05/kWh");
        assert_eq!(KilowattHourRate(dec!(-0.03)).to_string(), "-$0.03/kWh");
        assert_eq!(KilowattHourRate::ZERO.to_string(), "$0.00/kWh");
        assert_eq!(KilowattHourRate(dec!(-0)).to_string(), "$0.00/kWh");
        assert_eq!(KilowattHourRate(dec!(0.125)).to_string(), "+$0.13/kWh");
    }

    #[test]
    fn test_new() {
        assert_eq!(KilowattHourRate::new(-5, 2), KilowattHourRate(dec!(-0.05)));
        assert_eq!(KilowattHourRate::new(3, 2), KilowattHourRate(dec!(0.03)));
        assert_eq!(KilowattHourRate::new(0, 0), KilowattHourRate::ZERO);
        assert_eq!(
            KilowattHourRate::new(-12_345_678_901, 4),
            KilowattHourRate(dec!(-1234567.8901)),
        );
    }

    #[test]
    fn test_new_in_const_context() {
        const GREEN: KilowattHourRate = KilowattHourRate::new(-5, 2);
        assert_eq!(GREEN.to_string(), "-$0.05/kWh");
    }
}
