//! CLI error types

use pricer_mc::mc::ConfigError;
use pricer_mc::types::PricingError;
use thiserror::Error;

/// Errors surfaced by the `mcprice` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Market inputs rejected before simulation.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Path count or series length out of range.
    #[error("Simulation config error: {0}")]
    Simulation(#[from] ConfigError),

    /// TOML file missing or unparseable.
    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    /// Environment variable present but unparseable.
    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    /// Unrecognised log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Format other than table, json or csv.
    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    /// Output file or stream failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
