//! Demo command implementation.
//!
//! Runs the sample scenarios against the base and extended schedules. A
//! failed scenario is reported and the rest still run.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use ytm_bonds::pricing::YieldSolver;
use ytm_bonds::BondResult;
use ytm_core::types::{CashFlowSchedule, Date};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::config::SolverSettings;
use crate::output::{format_percent, format_price, print_error, print_header, print_output};
use crate::schedules;

/// Arguments for the demo command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Pricing date for the price scenarios and the first yield scenarios
    #[arg(long, default_value = "2021-03-27")]
    pub pricing_date: String,

    /// Later pricing date for the third yield scenario
    #[arg(long, default_value = "2021-04-07")]
    pub later_date: String,

    /// Yield in percent for the price scenario
    #[arg(long = "yield", default_value = "4.22", allow_negative_numbers = true)]
    pub yield_value: f64,
}

#[derive(Debug, Clone, Copy)]
enum Scenario {
    Yield { date: Date, price_pct: f64 },
    Price { date: Date, yield_pct: f64 },
}

/// One row of demo output.
#[derive(Debug, Serialize, Tabled)]
struct DemoRow {
    #[tabled(rename = "Schedule")]
    schedule: String,
    #[tabled(rename = "Pricing Date")]
    pricing_date: String,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Iterations")]
    iterations: String,
}

/// Execute the demo command.
pub fn execute(args: DemoArgs, settings: &SolverSettings, format: OutputFormat) -> Result<()> {
    let pricing_date = parse_date(&args.pricing_date)?;
    let later_date = parse_date(&args.later_date)?;

    let base = schedules::base_schedule()?;
    let extended = schedules::extended_schedule(&base)?;
    let solver = settings.to_solver();

    let scenarios = [
        Scenario::Yield {
            date: pricing_date,
            price_pct: 102.0,
        },
        Scenario::Yield {
            date: pricing_date,
            price_pct: 98.0,
        },
        Scenario::Yield {
            date: later_date,
            price_pct: 102.0,
        },
        Scenario::Price {
            date: pricing_date,
            yield_pct: args.yield_value,
        },
    ];

    let mut rows = Vec::new();
    let mut failures = 0usize;

    for (name, schedule) in [("base", &base), ("extended", &extended)] {
        for scenario in scenarios {
            match run_scenario(&solver, schedule, scenario) {
                Ok((result, iterations)) => rows.push(DemoRow {
                    schedule: name.to_string(),
                    pricing_date: scenario_date(scenario).to_string(),
                    input: scenario_input(scenario),
                    result,
                    iterations,
                }),
                Err(e) => {
                    failures += 1;
                    tracing::warn!(schedule = name, ?scenario, "scenario failed: {e}");
                    print_error(&format!(
                        "{name} schedule, {}: {e}",
                        scenario_input(scenario)
                    ));
                }
            }
        }
    }

    match format {
        OutputFormat::Table => {
            print_header("Demonstration Scenarios");
            print_output(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.result);
            }
        }
    }

    tracing::debug!(succeeded = rows.len(), failures, "demo finished");
    Ok(())
}

fn run_scenario(
    solver: &YieldSolver,
    schedule: &CashFlowSchedule,
    scenario: Scenario,
) -> BondResult<(String, String)> {
    match scenario {
        Scenario::Yield { date, price_pct } => {
            let result = solver.solve(schedule, date, price_pct / 100.0)?;
            Ok((
                format_percent(result.yield_value),
                result.iterations.to_string(),
            ))
        }
        Scenario::Price { date, yield_pct } => {
            let price = solver.price(schedule, date, yield_pct / 100.0)?;
            Ok((format_price(price), String::new()))
        }
    }
}

fn scenario_date(scenario: Scenario) -> Date {
    match scenario {
        Scenario::Yield { date, .. } | Scenario::Price { date, .. } => date,
    }
}

fn scenario_input(scenario: Scenario) -> String {
    match scenario {
        Scenario::Yield { price_pct, .. } => format!("price {price_pct}"),
        Scenario::Price { yield_pct, .. } => format!("yield {yield_pct}%"),
    }
}
