use std::fmt::{Debug, Display, Formatter};

use chrono::TimeDelta;
use rust_decimal::Decimal;

use crate::quantity::Quantity;

pub type Hours = Quantity<0, 1, 0>;

impl Hours {
    const MILLISECONDS_PER_HOUR: i64 = 3_600_000;

    pub const ONE: Self = Self(Decimal::ONE);
}

impl From<TimeDelta> for Hours {
    /// Exact to the millisecond.
    fn from(delta: TimeDelta) -> Self {
        Self(
            Decimal::from(delta.num_milliseconds()) / Decimal::from(Self::MILLISECONDS_PER_HOUR),
        )
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0)
    }
}
