use serde::{Deserialize, Serialize};

use crate::meter::{ElectricityReading, SmartMeterId};

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidMeterReadings {
    #[error("smart meter ID is missing")]
    MissingSmartMeterId,

    #[error("no electricity readings")]
    NoElectricityReadings,
}

/// Readings of a single meter as pushed by the meter itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReadings {
    #[serde(default)]
    pub smart_meter_id: SmartMeterId,

    #[serde(default)]
    pub electricity_readings: Vec<ElectricityReading>,
}

impl MeterReadings {
    /// Reject readings that must never reach the store.
    pub fn validate(&self) -> Result<(), InvalidMeterReadings> {
        if self.smart_meter_id.is_empty() {
            Err(InvalidMeterReadings::MissingSmartMeterId)
        } else if self.electricity_readings.is_empty() {
            Err(InvalidMeterReadings::NoElectricityReadings)
        } else {
            Ok(())
        }
    }
}
