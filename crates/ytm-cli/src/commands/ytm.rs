//! Yield command implementation.
//!
//! Solves for yield-to-maturity from a price in percent of par.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, validate_price};
use crate::config::SolverSettings;
use crate::output::{format_percent, format_price, print_header, print_output, KeyValue};
use crate::schedules;

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    /// Pricing date (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    pub pricing_date: String,

    /// Market price in percent of par (e.g., 102 for 102%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub price: f64,

    /// Use the extended sample schedule
    #[arg(short, long)]
    pub extended: bool,
}

#[derive(Debug, Serialize)]
struct YieldOutput {
    pricing_date: String,
    price: f64,
    yield_value: f64,
    iterations: u32,
    residual: f64,
    day_count: String,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, settings: &SolverSettings, format: OutputFormat) -> Result<()> {
    let pricing_date = parse_date(&args.pricing_date)?;
    let price = validate_price(args.price)?;
    let schedule = schedules::select(args.extended)?;
    let solver = settings.to_solver();

    tracing::info!(%pricing_date, price, cash_flows = schedule.len(), "solving yield");

    let result = solver.solve(&schedule, pricing_date, price / 100.0)?;

    match format {
        OutputFormat::Json => {
            let output = YieldOutput {
                pricing_date: pricing_date.to_string(),
                price,
                yield_value: result.yield_value,
                iterations: result.iterations,
                residual: result.residual,
                day_count: solver.day_count().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => println!("{:.6}", result.yield_value * 100.0),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = vec![
                KeyValue::new("Pricing Date", pricing_date.to_string()),
                KeyValue::new("Cash Flows", schedule.len().to_string()),
                KeyValue::new("Day Count", solver.day_count().to_string()),
                KeyValue::new("Price (Input)", format_price(price)),
                KeyValue::new("Yield to Maturity", format_percent(result.yield_value)),
                KeyValue::new("Iterations", result.iterations.to_string()),
                KeyValue::new("Residual", format!("{:.3e}", result.residual)),
            ];
            if format == OutputFormat::Table {
                print_header("Yield to Maturity");
            }
            print_output(&rows, format)?;
        }
    }

    Ok(())
}
