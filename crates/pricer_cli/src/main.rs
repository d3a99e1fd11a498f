//! mcprice - Monte Carlo European call estimator
//!
//! Command-line host for the `pricer_mc` kernel.
//!
//! # Commands
//!
//! - `mcprice simulate` - Price an estimate series and compare it with Black-Scholes
//! - `mcprice analytic` - Black-Scholes price and Greeks
//! - `mcprice check` - Print the resolved configuration
//!
//! # Configuration
//!
//! Settings resolve from command-line flags, then `MCPRICE_*` environment
//! variables, then the `--config` TOML file, then built-in defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::MarketArgs;
use config::{build_config, CliOverrides, LogLevel, OutputFormat};

/// Monte Carlo European call estimator CLI
#[derive(Parser)]
#[command(name = "mcprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// Simulation overrides shared by `simulate` and `check`.
#[derive(Args, Debug, Clone, Default)]
struct RunArgs {
    /// Paths per estimate
    #[arg(short = 'n', long = "paths")]
    n_paths: Option<usize>,

    /// Number of estimates in the series
    #[arg(short = 'm', long = "series")]
    series_len: Option<usize>,

    /// Seed for the variate stream
    #[arg(long)]
    seed: Option<u64>,

    /// Price batches in parallel
    #[arg(short, long)]
    parallel: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Price an estimate series and compare it with Black-Scholes
    Simulate {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        run: RunArgs,

        /// Write the raw estimates to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Black-Scholes price and Greeks
    Analytic {
        #[command(flatten)]
        market: MarketArgs,
    },

    /// Print the resolved configuration
    Check {
        #[command(flatten)]
        run: RunArgs,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let run = match &self.command {
            Commands::Simulate { run, .. } | Commands::Check { run } => run.clone(),
            Commands::Analytic { .. } => RunArgs::default(),
        };
        let log_level = if self.verbose {
            Some(LogLevel::Debug)
        } else {
            self.log_level
        };

        CliOverrides {
            config_file: self.config.clone(),
            n_paths: run.n_paths,
            series_len: run.series_len,
            seed: run.seed,
            parallel: run.parallel,
            log_level,
            format: self.format,
        }
    }
}

fn init_tracing(log_level: LogLevel) {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides())?;

    init_tracing(config.log_level);

    info!("mcprice v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Simulate { market, output, .. } => {
            commands::simulate::run(&config, &market, output.as_deref())
        }
        Commands::Analytic { market } => commands::analytic::run(&market, config.format),
        Commands::Check { .. } => commands::check::run(&config),
    }
}
