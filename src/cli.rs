use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::meter::SmartMeterId;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Price plan catalog, the built-in plans are used when the file does not exist.
    #[clap(long = "plans-file", env = "PLANS_FILE", default_value = "plans.toml")]
    pub plans_file: PathBuf,

    /// Stored meter readings.
    #[clap(long = "readings-file", env = "READINGS_FILE", default_value = "readings.json")]
    pub readings_file: PathBuf,

    #[clap(long, env = "OUTPUT_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate and store meter readings.
    #[clap(name = "store")]
    Store(StoreArgs),

    /// Show the stored readings of the meter.
    #[clap(name = "readings")]
    Readings(MeterArgs),

    /// Calculate the consumption cost under each price plan.
    #[clap(name = "compare")]
    Compare(MeterArgs),

    /// Recommend the cheapest price plans.
    #[clap(name = "recommend")]
    Recommend(RecommendArgs),

    /// Show the price plans.
    #[clap(name = "plans")]
    Plans,
}

#[derive(Parser)]
pub struct StoreArgs {
    /// JSON document with the meter readings, `-` for the standard input.
    #[clap(long, short, default_value = "-")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct MeterArgs {
    #[clap(long = "meter-id", alias = "smart-meter-id", env = "SMART_METER_ID")]
    pub smart_meter_id: SmartMeterId,
}

#[derive(Parser)]
pub struct RecommendArgs {
    #[clap(flatten)]
    pub meter: MeterArgs,

    /// Maximum number of recommended plans, all of them by default.
    #[clap(long)]
    pub limit: Option<usize>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
