//! CLI configuration management
//!
//! Simulation sizes, seed, execution mode, log level and output format are
//! resolved from a TOML file, `MCPRICE_*` environment variables and
//! command-line flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_mc::mc::{ExecutionMode, MonteCarloConfig, DEFAULT_PATHS, DEFAULT_SERIES_LEN};
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Environment variable names.
pub const ENV_PATHS: &str = "MCPRICE_PATHS";
pub const ENV_SERIES: &str = "MCPRICE_SERIES";
pub const ENV_SEED: &str = "MCPRICE_SEED";
pub const ENV_PARALLEL: &str = "MCPRICE_PARALLEL";
pub const ENV_LOG_LEVEL: &str = "MCPRICE_LOG_LEVEL";
pub const ENV_FORMAT: &str = "MCPRICE_FORMAT";

/// Log levels accepted on the command line and in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(CliError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Paths per estimate
    pub n_paths: usize,
    /// Estimates per series
    pub series_len: usize,
    /// Stream seed; the library default applies when unset
    pub seed: Option<u64>,
    /// Price batches on the rayon pool
    pub parallel: bool,
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = CliError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            series_len: DEFAULT_SERIES_LEN,
            seed: None,
            parallel: false,
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigFile(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigFile(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from `lookup`, which maps a variable name to its value.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PATHS) {
            self.n_paths = parse_env(ENV_PATHS, &value)?;
        }
        if let Some(value) = lookup(ENV_SERIES) {
            self.series_len = parse_env(ENV_SERIES, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            self.seed = Some(parse_env(ENV_SEED, &value)?);
        }
        if let Some(value) = lookup(ENV_PARALLEL) {
            self.parallel = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(CliError::InvalidEnv {
                        var: ENV_PARALLEL,
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&value)?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(n_paths) = cli.n_paths {
            self.n_paths = n_paths;
        }
        if let Some(series_len) = cli.series_len {
            self.series_len = series_len;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.parallel {
            self.parallel = true;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    /// Execution mode implied by the `parallel` flag.
    pub fn execution(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Builds the validated simulation config.
    pub fn to_mc_config(&self) -> Result<MonteCarloConfig> {
        Ok(MonteCarloConfig::builder()
            .n_paths(self.n_paths)
            .series_len(self.series_len)
            .execution(self.execution())
            .maybe_seed(self.seed)
            .build()?)
    }
}

fn parse_env<T: FromStr>(var: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| CliError::InvalidEnv {
        var,
        value: value.to_string(),
    })
}

/// Values given on the command line; `None` leaves lower layers in place.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    pub n_paths: Option<usize>,
    pub series_len: Option<usize>,
    pub seed: Option<u64>,
    /// Only a set flag overrides; absence keeps the lower layer's value
    pub parallel: bool,
    pub log_level: Option<LogLevel>,
    pub format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig> {
    build_config_with(cli, |var| std::env::var(var).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliOverrides, lookup: F) -> Result<CliConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli);

    // Fail early on sizes the engine would reject.
    config.to_mc_config()?;

    Ok(config)
}
