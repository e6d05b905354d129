mod snapshot;

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::{
    meter::{ElectricityReading, InvalidMeterReadings, MeterReadings, SmartMeterId},
    prelude::*,
};

/// Anything that can fetch a meter's readings by its ID.
pub trait ReadingSource {
    /// Snapshot of the meter's readings, empty when the meter is unknown.
    fn readings(&self, smart_meter_id: &SmartMeterId) -> Vec<ElectricityReading>;
}

/// Append-only in-memory reading store.
///
/// Appends are serialized by the lock, and readers get a copy so they never observe a half-done append.
#[derive(Default)]
pub struct ReadingStore {
    readings: RwLock<HashMap<SmartMeterId, Vec<ElectricityReading>>>,
}

impl ReadingStore {
    /// Append the readings to the meter's list, creating it if absent.
    ///
    /// Empty input is a no-op: it neither creates an entry nor touches the existing one.
    #[instrument(skip_all, fields(smart_meter_id = %smart_meter_id, n_readings = readings.len()))]
    pub fn store_readings(&self, smart_meter_id: SmartMeterId, readings: Vec<ElectricityReading>) {
        if readings.is_empty() {
            return;
        }
        self.readings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(smart_meter_id)
            .or_default()
            .extend(readings);
        debug!("stored");
    }

    /// Validate and store the meter readings.
    pub fn store(&self, meter_readings: MeterReadings) -> Result<(), InvalidMeterReadings> {
        meter_readings.validate()?;
        self.store_readings(meter_readings.smart_meter_id, meter_readings.electricity_readings);
        Ok(())
    }

    pub fn contains(&self, smart_meter_id: &SmartMeterId) -> bool {
        self.readings.read().unwrap_or_else(PoisonError::into_inner).contains_key(smart_meter_id)
    }

    pub fn len(&self) -> usize {
        self.readings.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl ReadingSource for ReadingStore {
    fn readings(&self, smart_meter_id: &SmartMeterId) -> Vec<ElectricityReading> {
        self.readings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(smart_meter_id)
            .cloned()
            .unwrap_or_default()
    }
}
