//! acp-bench - JSON codec micro-benchmark for Agent Client Protocol messages

mod bench;
mod cli;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bench::BenchmarkRunner;
use cli::Cli;
use error::{BenchError, Result};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        output::output_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    init_logging(&cli.log_level)?;

    let runner = BenchmarkRunner::new(cli.config());
    let report = runner.run()?;
    output::output_report(&report)
}

/// Diagnostics go to stderr; stdout carries only the summary line
fn init_logging(log_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|e| {
            BenchError::Config(format!("invalid log level '{}': {}", log_level, e))
        })?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}
