pub mod cost;
pub mod energy;
pub mod power;
pub mod rate;
pub mod time;

use std::ops::{Div, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal quantity tagged with its dimension exponents.
///
/// Multiplication saturates at the bounds of [`Decimal`] instead of panicking.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Quantity<const POWER: isize, const TIME: isize, const COST: isize>(pub Decimal);

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<POWER, TIME, COST> {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Mul<Decimal>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0.saturating_mul(rhs))
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Div<Decimal>
    for Quantity<POWER, TIME, COST>
{
    type Output = Self;

    /// # Panics
    ///
    /// On a zero divisor, as [`Decimal`] does.
    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use rust_decimal::dec;

    use super::*;

    pub type Bare = Quantity<0, 0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_scalar_mul_div() {
        assert_eq!(Bare::from(dec!(1.5)) * dec!(2), Bare::from(dec!(3)));
        assert_eq!(Bare::from(dec!(3)) / dec!(4), Bare::from(dec!(0.75)));
    }

    #[test]
    fn test_mul_saturates() {
        assert_eq!(Bare::from(Decimal::MAX) * dec!(2), Bare::from(Decimal::MAX));
        assert_eq!(Bare::from(Decimal::MIN) * dec!(2), Bare::from(Decimal::MIN));
    }

    #[test]
    fn test_sum() {
        let sum: Bare = [dec!(0.1), dec!(0.2)].into_iter().map(Bare::from).sum();
        assert_eq!(sum, Bare::from(dec!(0.3)));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(Bare::from(dec!(1)).min(Bare::from(dec!(2))), Bare::from(dec!(1)));
        assert_eq!(Bare::from(dec!(2)).max(Bare::from(dec!(1))), Bare::from(dec!(2)));
    }
}
