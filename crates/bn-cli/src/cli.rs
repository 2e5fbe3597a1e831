use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bishnoi")]
#[command(about = "BishNoi account session CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Override the configured log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,
}
