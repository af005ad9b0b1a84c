use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, trace};

use weekly_pay::calculation::{PayrollSummary, average_weekly_pay};
use weekly_pay::config::{ConfigLoader, PayrollConfig};
use weekly_pay::input::load_employees;
use weekly_pay::report::{PayrollReport, format_average_line, format_summary};

/// Compute weekly pay statistics from an employee file
#[derive(Parser)]
#[command(
    name = "weekly-pay",
    version,
    about,
    long_about = None,
    after_help = "With no flags, the only output is the average weekly pay line, \
                  e.g. `Average Weekly Pay: $884.41`. Rejected records go to the \
                  debug log, not stdout."
)]
struct Cli {
    /// Employee file with one comma-separated record per line
    #[arg(default_value = "res/employees.txt")]
    input: PathBuf,

    /// Path to a YAML file overriding the delimiter or ID ranges
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print every statistic, not just the average
    #[arg(long, conflicts_with = "json")]
    summary: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?
            .into_config(),
        None => PayrollConfig::default(),
    };
    debug!(?config, "Using payroll config");

    let load = load_employees(&cli.input, &config)?;

    if cli.json {
        let report = PayrollReport::new(cli.input.display().to_string(), &load);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.summary {
        let summary = PayrollSummary::from_employees(&load.employees);
        print!("{}", format_summary(&summary, load.skipped));
    } else {
        println!("{}", format_average_line(average_weekly_pay(&load.employees)));
    }

    Ok(())
}
