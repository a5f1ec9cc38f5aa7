//! fifteen CLI - Numeric Tic-Tac-Toe environment toolkit
//!
//! - Simulate random-agent episodes against the random env
//! - Inspect a board's legal moves and terminal status

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fifteen")]
#[command(version, about = "Odd-vs-even Tic-Tac-Toe environment toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play episodes with a uniform-random agent
    Simulate(fifteen::cli::commands::simulate::SimulateArgs),

    /// Show allowed positions, values and terminal status for a board
    Inspect(fifteen::cli::commands::inspect::InspectArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Simulate(args) => fifteen::cli::commands::simulate::execute(args),
        Commands::Inspect(args) => fifteen::cli::commands::inspect::execute(args),
    }
}
