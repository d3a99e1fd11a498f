//! Sizes, execution mode and seed for an estimate series.

use super::error::ConfigError;

/// Maximum number of simulation paths per estimate.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of estimates per series.
pub const MAX_SERIES_LEN: usize = 1_000_000;

/// Default number of paths averaged into one estimate.
pub const DEFAULT_PATHS: usize = 100_000;

/// Default number of estimates in a series.
pub const DEFAULT_SERIES_LEN: usize = 1_000;

/// How the outer series loop is executed.
///
/// - `Sequential`: one stream, consumed strictly in batch order
/// - `Parallel`: batches priced on the rayon pool, each with its own stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single stream, strict draw order.
    #[default]
    Sequential,

    /// Per-batch derived streams on the rayon thread pool.
    ///
    /// Reproducible for a fixed seed and independent of thread count, but
    /// the draws differ from the sequential order.
    Parallel,
}

/// Shape of one estimate series.
///
/// The default is the reference shape: 1,000 estimates of 100,000 paths each,
/// priced sequentially on the default seed.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{ExecutionMode, MonteCarloConfig};
///
/// let quick = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .series_len(250)
///     .execution(ExecutionMode::Parallel)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(quick.n_paths(), 20_000);
/// assert_eq!(quick.draws_per_series(), 5_000_000);
///
/// let reference = MonteCarloConfig::default();
/// assert_eq!(reference.n_paths(), 100_000);
/// assert_eq!(reference.series_len(), 1_000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths per estimate.
    n_paths: usize,
    /// Number of estimates per series.
    series_len: usize,
    /// Outer loop execution mode.
    execution: ExecutionMode,
    /// Stream seed; `None` means the library default.
    seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            series_len: DEFAULT_SERIES_LEN,
            execution: ExecutionMode::Sequential,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Starts a builder with every field unset.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths per estimate.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of estimates per series.
    #[inline]
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    /// Returns the outer loop execution mode.
    #[inline]
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Configured seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Total number of variates one series consumes.
    #[inline]
    pub fn draws_per_series(&self) -> usize {
        self.n_paths.saturating_mul(self.series_len)
    }

    /// Checks both sizes against their bounds.
    ///
    /// # Errors
    ///
    /// Fails when:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `series_len` is 0 or greater than [`MAX_SERIES_LEN`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.series_len == 0 || self.series_len > MAX_SERIES_LEN {
            return Err(ConfigError::InvalidSeriesLength(self.series_len));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset sizes fall back to [`DEFAULT_PATHS`] and [`DEFAULT_SERIES_LEN`].
/// Validation happens at build time.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    series_len: Option<usize>,
    execution: ExecutionMode,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths per estimate.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, MAX_PATHS]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of estimates per series.
    ///
    /// # Arguments
    ///
    /// * `series_len` - Number of estimates in [1, MAX_SERIES_LEN]
    #[inline]
    pub fn series_len(mut self, series_len: usize) -> Self {
        self.series_len = Some(series_len);
        self
    }

    /// Sets the outer loop execution mode.
    #[inline]
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Fixes the stream seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Fills unset sizes with defaults and validates.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either size is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            series_len: self.series_len.unwrap_or(DEFAULT_SERIES_LEN),
            execution: self.execution,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_shape() {
        let config = MonteCarloConfig::default();
        assert_eq!(config.n_paths(), 100_000);
        assert_eq!(config.series_len(), 1_000);
        assert_eq!(config.execution(), ExecutionMode::Sequential);
        assert_eq!(config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults() {
        let config = MonteCarloConfig::builder().build().unwrap();
        assert_eq!(config, MonteCarloConfig::default());
    }

    #[test]
    fn test_builder_sets_sizes() {
        let config = MonteCarloConfig::builder()
            .n_paths(10_000)
            .series_len(50)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.series_len(), 50);
        assert_eq!(config.draws_per_series(), 500_000);
    }

    #[test]
    fn test_builder_seed_and_clear() {
        let config = MonteCarloConfig::builder().seed(42).build().unwrap();
        assert_eq!(config.seed(), Some(42));

        let config = MonteCarloConfig::builder()
            .seed(42)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_with_execution() {
        let config = MonteCarloConfig::builder()
            .execution(ExecutionMode::Parallel)
            .build()
            .unwrap();
        assert_eq!(config.execution(), ExecutionMode::Parallel);
    }

    #[test]
    fn test_single_path_is_valid() {
        assert!(MonteCarloConfig::builder().n_paths(1).build().is_ok());
    }

    #[test]
    fn test_zero_paths_rejected() {
        let result = MonteCarloConfig::builder().n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_path_count_above_cap_rejected() {
        let result = MonteCarloConfig::builder().n_paths(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_empty_series_rejected() {
        let result = MonteCarloConfig::builder().series_len(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidSeriesLength(0))));
    }

    #[test]
    fn test_series_above_cap_rejected() {
        let result = MonteCarloConfig::builder()
            .series_len(MAX_SERIES_LEN + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSeriesLength(_))));
    }

    #[test]
    fn test_execution_mode_default() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Sequential);
    }
}
