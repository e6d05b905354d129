use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
    sync::{PoisonError, RwLock},
};

use crate::{
    meter::{ElectricityReading, SmartMeterId},
    prelude::*,
    store::ReadingStore,
};

impl ReadingStore {
    /// Load the store from the JSON snapshot, or start empty when there is none yet.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("no snapshot, starting empty");
            return Ok(Self::default());
        }
        let readings: HashMap<SmartMeterId, Vec<ElectricityReading>> =
            serde_json::from_slice(&fs::read(path)?)
                .with_context(|| format!("failed to parse `{}`", path.display()))?;
        debug!(n_meters = readings.len(), "loaded");
        Ok(Self { readings: RwLock::new(readings) })
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        let json = {
            let readings = self.readings.read().unwrap_or_else(PoisonError::into_inner);
            // Sorted keys keep the file diff-friendly.
            serde_json::to_string_pretty(&readings.iter().collect::<BTreeMap<_, _>>())?
        };
        fs::write(path, json).with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!("written");
        Ok(())
    }
}
