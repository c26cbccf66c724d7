//! Fibertrace CLI - fiber plant connectivity from the command line.
//!
//! Loads a plant snapshot (devices + connections) from a JSON file and
//! answers trace, audit, and stats queries over it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Fibertrace: fiber plant connectivity tracing and audit.
#[derive(Parser)]
#[command(name = "fibertrace")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Plant snapshot file (JSON with "nodes" and "edges" arrays)
    #[arg(short, long, global = true, default_value = "plant.json")]
    snapshot: PathBuf,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace the shortest path between two devices
    Trace {
        /// Identifier of the origin device
        start: String,

        /// Identifier of the destination device
        end: String,

        /// Emit the trace result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Audit the plant: segments, rings, isolated devices, dangling edges
    Audit,

    /// Show snapshot statistics
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Run the appropriate command
    let result = match cli.command {
        Commands::Trace { start, end, json } => cli::trace::run(&cli.snapshot, &start, &end, json),
        Commands::Audit => cli::audit::run(&cli.snapshot),
        Commands::Stats => cli::stats::run(&cli.snapshot),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
