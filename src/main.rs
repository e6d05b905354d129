#![allow(clippy::doc_markdown)]

mod cli;
mod core;
mod meter;
mod plan;
mod prelude;
mod quantity;
mod store;
mod tables;

use std::{fs, io, path::Path};

use clap::{Parser, crate_version};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, OutputFormat},
    core::PlanComparator,
    meter::{MeterReadings, SmartMeterId},
    plan::{PlanCatalog, PricePlans},
    prelude::*,
    store::{ReadingSource, ReadingStore},
    tables::{
        build_plan_costs_table,
        build_plans_table,
        build_readings_table,
        build_recommendations_table,
    },
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let plans = PricePlans::read_from(&args.plans_file)?;
    let store = ReadingStore::read_from(&args.readings_file)?;

    match args.command {
        Command::Store(store_args) => {
            let meter_readings = read_meter_readings(&store_args.input)?;
            let smart_meter_id = meter_readings.smart_meter_id.clone();
            store.store(meter_readings).with_context(|| format!("rejected readings of `{smart_meter_id}`"))?;
            store.write_to(&args.readings_file)?;
            info!(%smart_meter_id, "stored");
        }
        Command::Readings(meter_args) => {
            let smart_meter_id = &meter_args.smart_meter_id;
            ensure_known(&store, smart_meter_id)?;
            let readings = store.readings(smart_meter_id);
            print(args.format, &readings, || build_readings_table(&readings))?;
        }
        Command::Compare(meter_args) => {
            let smart_meter_id = &meter_args.smart_meter_id;
            ensure_known(&store, smart_meter_id)?;
            let costs = PlanComparator::new(&plans, &store).cost_for_each_plan(smart_meter_id);
            if costs.is_empty() {
                warn!("there are no price plans to compare");
            }
            print(args.format, &costs, || build_plan_costs_table(&costs))?;
        }
        Command::Recommend(recommend_args) => {
            let smart_meter_id = &recommend_args.meter.smart_meter_id;
            if !store.contains(smart_meter_id) {
                warn!(%smart_meter_id, "no readings, every plan costs nothing");
            }
            let recommendations = PlanComparator::new(&plans, &store)
                .recommend_cheapest_plans(smart_meter_id, recommend_args.limit);
            print(args.format, &recommendations, || build_recommendations_table(&recommendations))?;
        }
        Command::Plans => {
            print(args.format, &plans, || build_plans_table(&plans))?;
        }
    }

    info!(n_plans = plans.price_plans().len(), n_meters = store.len(), "done!");
    Ok(())
}

/// Meters without any stored readings are reported as not found.
fn ensure_known(store: &ReadingStore, smart_meter_id: &SmartMeterId) -> Result {
    ensure!(store.contains(smart_meter_id), "smart meter `{smart_meter_id}` is not found");
    Ok(())
}

fn read_meter_readings(input: &Path) -> Result<MeterReadings> {
    let json = if input == Path::new("-") {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read `{}`", input.display()))?
    };
    serde_json::from_str(&json).context("failed to parse the meter readings")
}

fn print<T: Serialize>(
    format: OutputFormat,
    value: &T,
    build_table: impl FnOnce() -> comfy_table::Table,
) -> Result {
    match format {
        OutputFormat::Table => println!("{}", build_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
