mod cli;
mod commands;
mod git;
mod telemetry;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    init_tracing();
    let cli = Cli::parse();
    std::process::exit(commands::run(cli.command));
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("VERISTAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
