use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, energy::KilowattHours, time::Hours};

/// Instantaneous power, as reported by a smart meter.
pub type Kilowatts = Quantity<1, 0, 0>;

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kW", self.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kW", self.0)
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0.saturating_mul(rhs.0))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_mul_hours() {
        assert_eq!(
            Kilowatts::from(dec!(12.5)) * Hours::from(dec!(0.75)),
            KilowattHours::from(dec!(9.375)),
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilowatts::from(dec!(12.5)).to_string(), "12.500 kW");
    }
}
