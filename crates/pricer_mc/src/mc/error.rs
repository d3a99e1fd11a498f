//! Error types for Monte Carlo configuration.

use thiserror::Error;

use super::config::{MAX_PATHS, MAX_SERIES_LEN};

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur during construction when invalid sizes are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Path count outside valid range [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),
    /// Series length outside valid range [1, MAX_SERIES_LEN].
    #[error("Invalid series length {0}: must be in range [1, {max}]", max = MAX_SERIES_LEN)]
    InvalidSeriesLength(usize),
}
