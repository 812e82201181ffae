//! Price command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, validate_yield};
use crate::config::SolverSettings;
use crate::output::{format_percent, format_price, print_header, print_output, KeyValue};
use crate::schedules;

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Pricing date (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    pub pricing_date: String,

    /// Yield in percent (e.g., 4.22 for 4.22%)
    #[arg(short = 'y', long = "yield", allow_negative_numbers = true)]
    pub yield_value: f64,

    /// Use the extended sample schedule
    #[arg(short, long)]
    pub extended: bool,
}

#[derive(Debug, Serialize)]
struct PriceOutput {
    pricing_date: String,
    yield_value: f64,
    price: f64,
    day_count: String,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, settings: &SolverSettings, format: OutputFormat) -> Result<()> {
    let pricing_date = parse_date(&args.pricing_date)?;
    let rate = validate_yield(args.yield_value)? / 100.0;
    let schedule = schedules::select(args.extended)?;
    let solver = settings.to_solver();

    tracing::info!(%pricing_date, rate, cash_flows = schedule.len(), "pricing");

    let price = solver.price(&schedule, pricing_date, rate)?;

    match format {
        OutputFormat::Json => {
            let output = PriceOutput {
                pricing_date: pricing_date.to_string(),
                yield_value: rate,
                price,
                day_count: solver.day_count().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => println!("{}", format_price(price)),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Pricing Date", pricing_date.to_string()),
                KeyValue::new("Cash Flows", schedule.len().to_string()),
                KeyValue::new("Day Count", solver.day_count().to_string()),
                KeyValue::new("Yield (Input)", format_percent(rate)),
                KeyValue::new("Price (% of par)", format_price(price)),
            ];
            if format == OutputFormat::Table {
                print_header("Bond Pricing Results");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
