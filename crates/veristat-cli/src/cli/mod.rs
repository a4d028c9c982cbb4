use clap::{Parser, Subcommand};

mod args;

pub use args::ReportArgs;

#[derive(Debug, Parser)]
#[command(name = "veristat")]
#[command(about = "Veristat command-line reporter", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report an artifact to Veristat.
    Report(ReportArgs),
}
