use std::{fs, path::Path};

use chrono::{DateTime, Datelike, Utc, Weekday};
use itertools::Itertools;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, quantity::rate::KilowattHourRate};

#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Supplier(String);

impl From<&str> for Supplier {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Scales the unit rate for consumption on the given day of week.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PeakTimeMultiplier {
    pub day_of_week: Weekday,
    pub multiplier: Decimal,
}

#[derive(Clone, Debug, bon::Builder, Serialize, Deserialize)]
pub struct PricePlan {
    #[builder(into)]
    pub supplier: Supplier,

    pub unit_rate: KilowattHourRate,

    #[builder(default)]
    #[serde(default)]
    pub peak_time_multipliers: Vec<PeakTimeMultiplier>,
}

impl PricePlan {
    /// Rate applicable at the given moment.
    ///
    /// The first multiplier matching the weekday wins, the plain unit rate applies otherwise.
    pub fn price_at(&self, time: DateTime<Utc>) -> KilowattHourRate {
        let weekday = time.weekday();
        self.peak_time_multipliers
            .iter()
            .find(|peak| peak.day_of_week == weekday)
            .map_or(self.unit_rate, |peak| self.unit_rate * peak.multiplier)
    }
}

/// Anything that can list all the known price plans.
pub trait PlanCatalog {
    /// Plans in their registration order.
    fn price_plans(&self) -> &[PricePlan];
}

/// Immutable registry of the price plans, loaded once on start.
#[derive(Clone, Debug, Serialize)]
pub struct PricePlans {
    price_plans: Vec<PricePlan>,
}

impl PricePlans {
    pub fn try_new(price_plans: Vec<PricePlan>) -> Result<Self> {
        if let Some(supplier) =
            price_plans.iter().map(|plan| &plan.supplier).duplicates().next()
        {
            bail!("supplier `{supplier}` is registered more than once");
        }
        Ok(Self { price_plans })
    }

    /// Read the catalog from the TOML file, or fall back to [`PricePlans::default`] if it does not exist.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("no catalog file, using the default plans");
            return Ok(Self::default());
        }
        let file: CatalogFile = toml::from_str(&fs::read_to_string(path)?)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        let this = Self::try_new(file.price_plans)?;
        info!(n_plans = this.price_plans.len(), "loaded the price plans");
        Ok(this)
    }
}

impl Default for PricePlans {
    fn default() -> Self {
        Self {
            price_plans: vec![
                PricePlan::builder()
                    .supplier("Dr Evil's Dark Energy")
                    .unit_rate(KilowattHourRate::from(Decimal::TEN))
                    .build(),
                PricePlan::builder()
                    .supplier("The Green Eco")
                    .unit_rate(KilowattHourRate::from(Decimal::TWO))
                    .build(),
                PricePlan::builder()
                    .supplier("Power for Everyone")
                    .unit_rate(KilowattHourRate::from(Decimal::ONE))
                    .build(),
            ],
        }
    }
}

impl PlanCatalog for PricePlans {
    fn price_plans(&self) -> &[PricePlan] {
        &self.price_plans
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    price_plans: Vec<PricePlan>,
}
