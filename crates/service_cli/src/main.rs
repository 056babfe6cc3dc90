//! DCF CLI - Command Line Equity Valuation
//!
//! Values stocks by discounted cash flow from provider snapshot files.
//!
//! # Commands
//!
//! - `dcf value [TICKERS...]` - Value one or more tickers
//! - `dcf assumptions` - Show the effective model assumptions
//! - `dcf check` - Validate configuration and the snapshot directory
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the snapshot feeds
//! (adapter layer) into the valuation kernel (pricer layer).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::assumptions::AssumptionsArgs;
use commands::check::CheckArgs;
use commands::value::ValueArgs;
use config::CliConfig;

/// Discounted cash flow equity valuation
#[derive(Parser)]
#[command(name = "dcf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "dcf.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value one or more tickers
    Value(ValueArgs),

    /// Show the effective model assumptions
    Assumptions(AssumptionsArgs),

    /// Check configuration and the snapshot data directory
    Check(CheckArgs),
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load_or_default(&cli.config) {
        Ok(config) => config.with_env_override(),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &CliConfig) -> Result<()> {
    match &cli.command {
        Commands::Value(args) => {
            config.validate()?;
            commands::value::run(args, config)
        }
        Commands::Assumptions(args) => {
            config.validate()?;
            commands::assumptions::run(args, config)
        }
        Commands::Check(args) => commands::check::run(args, config, &cli.config),
    }
}
