//! mcprice - Monte Carlo European Call Pricer CLI
//!
//! This is the operational entry point for the parallel Monte Carlo engine.
//!
//! # Commands
//!
//! - `mcprice price [--spot ..] [--paths ..] [--compare]` - Price a European call
//! - `mcprice check` - Report host and configuration, run a smoke pricing
//!
//! # Configuration
//!
//! Defaults, then `mcprice.toml` (or `--config <file>`), then `MCPRICE_*`
//! environment variables, then flags. Logs go to stderr; `RUST_LOG` overrides
//! the configured level.
//!
//! # Exit Codes
//!
//! `0` success (including `--help` and `--version`), `2` invalid input, `3`
//! numeric anomaly, `1` anything else, command-line usage errors included.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use crate::commands::price::PriceArgs;
use crate::config::{CliConfig, LogLevel, DEFAULT_CONFIG_FILE};

/// Monte Carlo European Call Pricer CLI
#[derive(Debug, Parser)]
#[command(name = "mcprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Configuration file path (default: mcprice.toml, optional)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Worker threads for the global pool (0 = rayon default)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price a European call option by Monte Carlo simulation
    Price(PriceArgs),

    /// Check system configuration and run a smoke pricing
    Check,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_code(err));
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(exit_code = err.exit_code(), "Command failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// `--help` and `--version` exit with 0; every other parse failure is a
/// usage error.
fn usage_exit_code(err: clap::Error) -> u8 {
    if err.use_stderr() {
        CliError::from(err).exit_code()
    } else {
        0
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli)?;
    init_tracing(config.log_level);

    if config.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build_global()?;
    }
    debug!(threads = rayon::current_num_threads(), "Thread pool ready");

    match cli.command {
        Commands::Price(args) => {
            args.apply(&mut config);
            commands::price::run(&config, args.format, args.compare)
        }
        Commands::Check => commands::check::run(&config),
    }
}

/// Loads file and environment layers, then applies the global flags.
fn load_config(cli: &Cli) -> Result<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path, true)?,
        None => CliConfig::load(&PathBuf::from(DEFAULT_CONFIG_FILE), false)?,
    };
    apply_global_flags(cli, &mut config);
    Ok(config)
}

fn apply_global_flags(cli: &Cli, config: &mut CliConfig) {
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
