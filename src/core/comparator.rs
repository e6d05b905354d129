use crate::{
    core::{PlanCost, PlanCosts, calculate_cost},
    meter::SmartMeterId,
    plan::PlanCatalog,
    prelude::*,
    store::ReadingSource,
};

/// Prices a meter's consumption under every known plan.
pub struct PlanComparator<'a, C: ?Sized, R: ?Sized> {
    plans: &'a C,
    readings: &'a R,
}

impl<'a, C, R> PlanComparator<'a, C, R>
where
    C: PlanCatalog + ?Sized,
    R: ReadingSource + ?Sized,
{
    pub const fn new(plans: &'a C, readings: &'a R) -> Self {
        Self { plans, readings }
    }

    /// One entry per registered plan.
    ///
    /// A meter without readings is not an error here: every plan simply costs nothing.
    #[instrument(skip_all, fields(smart_meter_id = %smart_meter_id))]
    pub fn cost_for_each_plan(&self, smart_meter_id: &SmartMeterId) -> PlanCosts {
        let readings = self.readings.readings(smart_meter_id);
        debug!(n_readings = readings.len(), "fetched the readings");
        let costs: PlanCosts = self
            .plans
            .price_plans()
            .iter()
            .map(|plan| PlanCost {
                supplier: plan.supplier.clone(),
                cost: calculate_cost(&readings, plan),
            })
            .collect();
        debug!(n_plans = costs.len(), "calculated");
        costs
    }

    /// Cheapest plans first, at most `limit` of them when specified.
    #[instrument(skip_all, fields(smart_meter_id = %smart_meter_id, limit = ?limit))]
    pub fn recommend_cheapest_plans(
        &self,
        smart_meter_id: &SmartMeterId,
        limit: Option<usize>,
    ) -> Vec<PlanCost> {
        let recommendations = self.cost_for_each_plan(smart_meter_id).into_ranked(limit);
        debug!(n_recommendations = recommendations.len(), "ranked");
        recommendations
    }
}
