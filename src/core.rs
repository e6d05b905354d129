mod calculator;
mod comparator;
mod plan_cost;

pub use self::{
    calculator::calculate_cost,
    comparator::PlanComparator,
    plan_cost::{PlanCost, PlanCosts},
};
