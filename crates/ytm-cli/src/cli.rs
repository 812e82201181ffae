//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{DemoArgs, PriceArgs, YieldArgs};

/// ytm - bond yield-to-maturity calculator
#[derive(Parser)]
#[command(name = "ytm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// TOML file with solver settings
    #[arg(short, long, global = true, env = "YTM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Truncate year fractions to whole years (ACT/365 integer division)
    #[arg(long, global = true)]
    pub whole_years: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Solve for yield-to-maturity from a price
    Yield(YieldArgs),

    /// Price the schedule at a given yield
    Price(PriceArgs),

    /// Run every demonstration scenario
    Demo(DemoArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
