//! Puppet host list probe entry point.

use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use probe_checks::cli::NodesCli;
use probe_checks::{logging, runner};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = NodesCli::parse();
    logging::init(cli.connection.verbose)?;

    let verdict = cli.execute().await;
    Ok(runner::report(&verdict))
}
