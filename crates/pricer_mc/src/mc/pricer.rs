//! Stateful Monte Carlo pricer.
//!
//! The [`MonteCarloPricer`] owns a configuration and one variate stream for
//! its whole lifetime. The stream is never rewound: every call continues
//! where the previous one stopped, so a sequence of calls is reproducible
//! only as a whole.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, warn};

use super::config::{ExecutionMode, MonteCarloConfig};
use super::engine::{price_once, price_series, price_series_parallel};
use super::error::ConfigError;
use super::series::EstimateSeries;
use crate::rng::{PricerRng, DEFAULT_SEED};
use crate::types::{PricingError, PricingParameters};

/// Monte Carlo pricing engine for European calls.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::{MonteCarloConfig, MonteCarloPricer};
/// use pricer_mc::types::PricingParameters;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(5_000)
///     .series_len(10)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut pricer = MonteCarloPricer::new(config).unwrap();
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
///
/// let first = pricer.price_series(&params);
/// let second = pricer.price_series(&params);
/// assert_ne!(first, second); // the stream kept advancing
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: PricerRng,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// The stream is seeded from `config.seed()`, or [`DEFAULT_SEED`] when unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        let seed = config.seed().unwrap_or(DEFAULT_SEED);
        Self::with_rng(config, PricerRng::from_seed(seed))
    }

    /// Creates a new pricer around an explicitly constructed stream.
    ///
    /// The configured seed, if any, is ignored in favour of `rng`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration is invalid.
    pub fn with_rng(config: MonteCarloConfig, rng: PricerRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the owned variate stream.
    #[inline]
    pub fn rng(&self) -> &PricerRng {
        &self.rng
    }

    /// Computes one estimate with the configured path count.
    pub fn price_once(&mut self, params: &PricingParameters) -> f64 {
        price_once(params, self.config.n_paths(), &mut self.rng)
    }

    /// Computes a full series with the configured sizes and execution mode.
    ///
    /// In parallel mode the base seed for the per-batch streams is the next
    /// 64-bit value of the owned stream, so repeated calls still differ and
    /// the whole call sequence stays reproducible.
    pub fn price_series(&mut self, params: &PricingParameters) -> EstimateSeries {
        let n_paths = self.config.n_paths();
        let series_len = self.config.series_len();

        debug!(
            spot = params.spot,
            strike = params.strike,
            rate = params.rate,
            dividend_yield = params.dividend_yield,
            maturity = params.maturity,
            volatility = params.volatility,
            n_paths,
            series_len,
            execution = ?self.config.execution(),
            "pricing estimate series"
        );

        let series = match self.config.execution() {
            ExecutionMode::Sequential => price_series(params, series_len, n_paths, &mut self.rng),
            ExecutionMode::Parallel => {
                let base_seed = self.rng.gen_u64();
                price_series_parallel(params, series_len, n_paths, base_seed)
            }
        };

        let non_finite = series.iter().filter(|x| !x.is_finite()).count();
        if non_finite > 0 {
            warn!(
                non_finite,
                volatility = params.volatility,
                maturity = params.maturity,
                "non-finite estimates: exp overflow in terminal price"
            );
        }

        series
    }

    /// Validates raw inputs and prices a full series.
    ///
    /// This is the six-scalar entry point used by host collaborators.
    /// Validation runs before any draw, so a rejected call leaves the stream
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] for non-positive spot,
    /// strike or maturity, negative volatility, or non-finite input.
    pub fn compute_series(
        &mut self,
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        maturity: f64,
        volatility: f64,
    ) -> Result<EstimateSeries, PricingError> {
        let params =
            PricingParameters::new(spot, strike, rate, dividend_yield, maturity, volatility)?;
        Ok(self.price_series(&params))
    }
}

impl Default for MonteCarloPricer {
    /// Reference configuration (1,000 × 100,000) on the default stream.
    fn default() -> Self {
        Self {
            config: MonteCarloConfig::default(),
            rng: PricerRng::default(),
        }
    }
}

/// Pricer behind [`compute_series`], created on first use.
static SHARED_PRICER: OnceLock<Mutex<MonteCarloPricer>> = OnceLock::new();

/// Prices a reference-shaped series on the process-wide stream.
///
/// Returns 1,000 estimates of 100,000 paths each. All calls share one
/// [`MonteCarloPricer::default`] stream for the life of the process, so
/// successive calls continue its draw order and return different series.
/// Concurrent callers are serialised.
///
/// # Errors
///
/// Returns [`PricingError`] if any input is invalid. Rejected calls
/// consume no draws.
pub fn compute_series(
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    maturity: f64,
    volatility: f64,
) -> Result<EstimateSeries, PricingError> {
    let params = PricingParameters::new(spot, strike, rate, dividend_yield, maturity, volatility)?;

    // A panic mid-series leaves the stream advanced but still valid.
    let mut pricer = SHARED_PRICER
        .get_or_init(|| Mutex::new(MonteCarloPricer::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    Ok(pricer.price_series(&params))
}
