//! ytm CLI - yield-to-maturity and pricing for a bond cash flow schedule.
//!
//! # Usage
//!
//! ```bash
//! # Yield of the sample bond at 102% of par
//! ytm yield --pricing-date 2021-03-27 --price 102
//!
//! # Price of the extended sample schedule at a 4.22% yield
//! ytm price --pricing-date 2021-03-27 --yield 4.22 --extended
//!
//! # Every demonstration scenario, as JSON
//! ytm --format json demo
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod schedules;

use cli::{Cli, Commands};
use config::SolverSettings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut settings = match cli.config {
        Some(ref path) => SolverSettings::from_file(path)?,
        None => SolverSettings::default(),
    };
    if cli.whole_years {
        settings = settings.with_whole_years();
    }
    tracing::debug!(?settings, "solver settings");

    let format = cli.format;

    match cli.command {
        Commands::Yield(args) => commands::ytm::execute(args, &settings, format)?,
        Commands::Price(args) => commands::price::execute(args, &settings, format)?,
        Commands::Demo(args) => commands::demo::execute(args, &settings, format)?,
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
