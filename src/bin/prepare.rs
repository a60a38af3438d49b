//! Converts raw per-country rows (yearly loss, cumulative gain) into the dataset
//! the viewer loads.

use std::path::PathBuf;
use std::process::ExitCode;

use bevy::log::{error, info, LogPlugin};
use bevy::prelude::App;
use clap::Parser;
use forest_cover::data::derive::{prepare_rows, PeriodPlan};

#[derive(Parser, Debug)]
#[command(name = "prepare", about = "Build the forest-cover viewer dataset")]
struct Args {
    /// JSON array of raw rows.
    input: PathBuf,
    /// Where to write the viewer dataset.
    #[arg(short, long, default_value = "assets/forest_cover.json")]
    output: PathBuf,
    /// First period start year.
    #[arg(long, default_value_t = 2000)]
    first: u16,
    /// Year the cumulative gain columns run up to.
    #[arg(long, default_value_t = 2020)]
    horizon: u16,
    /// Period length in years.
    #[arg(long, default_value_t = 5)]
    step: u16,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    // Only for its log subscriber; the app itself never runs.
    let mut logging = App::new();
    logging.add_plugins(LogPlugin::default());

    let raw = match std::fs::read_to_string(&args.input) {
        Ok(raw) => raw,
        Err(err) => {
            error!("failed to read {}: {err}", args.input.display());
            return ExitCode::FAILURE;
        }
    };
    let rows: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(rows) => rows,
        Err(err) => {
            error!("invalid JSON in {}: {err}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    let plan = PeriodPlan {
        first: args.first,
        horizon: args.horizon,
        step: args.step,
    };
    let records = match prepare_rows(&rows, plan) {
        Ok(records) => records,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let json = match serde_json::to_string_pretty(&records) {
        Ok(json) => json,
        Err(err) => {
            error!("failed to serialize dataset: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    if let Err(err) = std::fs::write(&args.output, json) {
        error!("failed to write {}: {err}", args.output.display());
        return ExitCode::FAILURE;
    }
    info!(
        "wrote {} countries to {}",
        records.len(),
        args.output.display()
    );
    ExitCode::SUCCESS
}
