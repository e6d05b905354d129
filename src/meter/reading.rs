use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quantity::power::Kilowatts;

/// Single smart meter reading, immutable once recorded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, derive_more::Constructor)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityReading {
    pub time: DateTime<Utc>,

    /// Instantaneous power at [`ElectricityReading::time`].
    pub reading: Kilowatts,
}
