//! Neutryx CLI - command-line adapter for the CDS Standard Model pricer.
//!
//! This is the only part of the workspace that performs I/O: it reads a
//! TOML input file, invokes the pure `pricer_core`/`pricer_models`/
//! `pricer_optimiser` core, and writes the result.
//!
//! # Commands
//!
//! - `neutryx bootstrap --input <file>` - bootstrap a survival curve from
//!   benchmark CDS tenors and spreads.
//! - `neutryx price --input <file>` - price a single CDS contract against
//!   a discount curve and a survival curve.
//!
//! # Architecture
//!
//! As the Service layer, this crate orchestrates `pricer_core` (L1),
//! `pricer_models` (L2) and `pricer_optimiser` (the bootstrapper) to
//! provide a unified command-line interface. It owns all `tracing`
//! initialisation; every layer beneath it stays pure and log-free.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// CDS Standard Model pricer CLI.
#[derive(Parser)]
#[command(name = "neutryx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap a survival curve from benchmark CDS tenors and spreads.
    Bootstrap {
        /// Path to the TOML input file (conventions, discount curve,
        /// benchmarks).
        #[arg(short, long)]
        input: String,

        /// Path to write the bootstrapped curve to. Prints to stdout if
        /// omitted.
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: `toml` or `json`.
        #[arg(short, long, default_value = "toml")]
        format: String,
    },

    /// Price a single CDS contract against a discount curve and a
    /// survival curve.
    Price {
        /// Path to the TOML input file (conventions, contract, curves).
        #[arg(short, long)]
        input: String,

        /// Output format: `table` or `json`.
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Bootstrap {
            input,
            output,
            format,
        } => commands::bootstrap::run(&input, output.as_deref(), &format),
        Commands::Price { input, format } => commands::price::run(&input, &format),
    }
}
