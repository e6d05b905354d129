use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{PlanCost, PlanCosts},
    meter::ElectricityReading,
    plan::{PlanCatalog, PricePlans},
    quantity::cost::Cost,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn cost_cell(cost: Cost, cheapest: Option<Cost>, priciest: Option<Cost>) -> Cell {
    Cell::new(cost.round_to_mills()).set_alignment(CellAlignment::Right).fg(
        if Some(cost) == cheapest {
            Color::Green
        } else if Some(cost) == priciest {
            Color::Red
        } else {
            Color::Reset
        },
    )
}

pub fn build_plan_costs_table(costs: &PlanCosts) -> Table {
    let (cheapest, priciest) =
        costs.into_iter().map(|plan_cost| plan_cost.cost).minmax().into_option().unzip();

    let mut table = new_table();
    table.set_header(vec!["Supplier", "Cost"]);
    for plan_cost in costs {
        table.add_row(vec![
            Cell::new(&plan_cost.supplier),
            cost_cell(plan_cost.cost, cheapest, priciest),
        ]);
    }
    table
}

pub fn build_recommendations_table(recommendations: &[PlanCost]) -> Table {
    let cheapest = recommendations.first().map(|plan_cost| plan_cost.cost);

    let mut table = new_table();
    table.set_header(vec!["#", "Supplier", "Cost"]);
    for (rank, plan_cost) in recommendations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).add_attribute(Attribute::Dim),
            Cell::new(&plan_cost.supplier),
            cost_cell(plan_cost.cost, cheapest, None),
        ]);
    }
    table
}

pub fn build_readings_table(readings: &[ElectricityReading]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Time", "Power"]);
    for reading in readings {
        table.add_row(vec![
            Cell::new(reading.time.format("%Y-%m-%d")).add_attribute(Attribute::Dim),
            Cell::new(reading.time.format("%H:%M:%S")),
            Cell::new(reading.reading).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_plans_table(plans: &PricePlans) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Supplier", "Unit rate", "Peak multipliers"]);
    for plan in plans.price_plans() {
        table.add_row(vec![
            Cell::new(&plan.supplier),
            Cell::new(plan.unit_rate).set_alignment(CellAlignment::Right),
            Cell::new(
                plan.peak_time_multipliers
                    .iter()
                    .map(|peak| format!("{}: ×{}", peak.day_of_week, peak.multiplier))
                    .join(", "),
            )
            .add_attribute(Attribute::Dim),
        ]);
    }
    table
}
