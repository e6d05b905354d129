use std::fmt::{Debug, Display, Formatter};

use rust_decimal::RoundingStrategy;
use serde::{Serialize, Serializer};

use crate::quantity::Quantity;

pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Round the cost to [mills][1].
    ///
    /// [1]: https://en.wikipedia.org/wiki/Mill_(currency)
    #[must_use]
    pub fn round_to_mills(self) -> Self {
        Self(self.0.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Serialize the cost rounded to mills, for the outputs meant for people and client apps.
pub fn serialize_in_mills<S: Serializer>(cost: &Cost, serializer: S) -> Result<S::Ok, S::Error> {
    cost.round_to_mills().serialize(serializer)
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} €", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}€", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::quantity::{energy::KilowattHours, rate::KilowattHourRate};

    #[test]
    fn test_round_to_mills() {
        assert_eq!(Cost::from(dec!(16.66666)).round_to_mills(), Cost::from(dec!(16.667)));
        assert_eq!(Cost::from(dec!(0.0015)).round_to_mills(), Cost::from(dec!(0.002)));
    }

    #[test]
    fn test_energy_times_rate() {
        assert_eq!(
            KilowattHours::from(dec!(9.375)) * KilowattHourRate::from(dec!(2)),
            Cost::from(dec!(18.75)),
        );
    }

    #[test]
    fn test_serialize_in_mills() {
        let mut serializer = serde_json::Serializer::new(Vec::new());
        serialize_in_mills(&Cost::from(dec!(16.66666)), &mut serializer).unwrap();
        assert_eq!(serializer.into_inner(), br#""16.667""#);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(dec!(1.875)).to_string(), "1.875 €");
    }
}
