use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    plan::Supplier,
    quantity::cost::{Cost, serialize_in_mills},
};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlanCost {
    pub supplier: Supplier,

    #[serde(serialize_with = "serialize_in_mills")]
    pub cost: Cost,
}

/// Cost per plan, in the plan registration order.
#[derive(Clone, Debug, Default, Eq, PartialEq, derive_more::IntoIterator)]
pub struct PlanCosts(#[into_iterator(owned, ref)] Vec<PlanCost>);

impl PlanCosts {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, supplier: &Supplier) -> Option<Cost> {
        self.0.iter().find(|plan_cost| &plan_cost.supplier == supplier).map(|plan_cost| plan_cost.cost)
    }

    /// Cheapest plans first, at most `limit` of them.
    ///
    /// The sort is stable, so equally priced plans stay in the registration order.
    #[must_use]
    pub fn into_ranked(self, limit: Option<usize>) -> Vec<PlanCost> {
        let mut ranked = self.0;
        ranked.sort_by_key(|plan_cost| plan_cost.cost);
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

impl FromIterator<PlanCost> for PlanCosts {
    fn from_iter<T: IntoIterator<Item = PlanCost>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Serialized as a supplier-to-cost map, with the costs rounded to mills.
impl Serialize for PlanCosts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for plan_cost in &self.0 {
            map.serialize_entry(&plan_cost.supplier, &plan_cost.cost.round_to_mills())?;
        }
        map.end()
    }
}
