//! Monte Carlo pricing of European calls and of the estimator's distribution.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (paths per estimate, series length, execution mode)
//! ├── PricerRng         (owned, continuing variate stream)
//! └── Kernels
//!     ├── price_once()             one discounted batch average
//!     ├── price_series()           ordered estimates, one stream
//!     └── price_series_parallel()  ordered estimates, per-batch streams
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_mc::mc::{price_series, EstimateSeries};
//! use pricer_mc::rng::PricerRng;
//! use pricer_mc::types::PricingParameters;
//!
//! let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let series: EstimateSeries = price_series(&params, 50, 2_000, &mut rng);
//! let summary = series.summary();
//! assert_eq!(summary.count, 50);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod pricer;
pub mod series;

pub use config::{
    ExecutionMode, MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, DEFAULT_SERIES_LEN,
    MAX_PATHS, MAX_SERIES_LEN,
};
pub use engine::{call_payoff, price_once, price_series, price_series_parallel, terminal_price};
pub use error::ConfigError;
pub use pricer::{compute_series, MonteCarloPricer};
pub use series::{EstimateSeries, SeriesSummary};
