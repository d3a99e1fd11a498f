//! Monte Carlo kernels for European calls under geometric Brownian motion.
//!
//! Two composable functions carry the whole computation:
//!
//! - [`price_once`]: one estimate, the discounted mean payoff of a batch
//! - [`price_series`]: many estimates drawn from one continuing stream
//!
//! [`price_series_parallel`] is the rayon variant of the outer loop.
//!
//! # Terminal Sampling
//!
//! The payoff depends only on the terminal price, so each path is one draw
//! from the exact GBM solution; there is no time stepping:
//! ```text
//! S_T = S_0 · exp((r − q − σ²/2)·T + φ·σ·√T)
//! ```
//!
//! # Numerics
//!
//! All arithmetic is `f64`. Overflow of `exp` is not guarded: extreme
//! `σ·√T` surfaces as a non-finite estimate.

use rayon::prelude::*;
use tracing::trace;

use super::series::EstimateSeries;
use crate::rng::{PricerRng, VariateSource};
use crate::types::PricingParameters;

/// Terminal asset price for the standard-normal draw `phi`.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::terminal_price;
/// use pricer_mc::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.0).unwrap();
/// let st = terminal_price(&params, 1.3);
/// assert!((st - 100.0 * 0.05_f64.exp()).abs() < 1e-12);
/// ```
#[inline]
pub fn terminal_price(params: &PricingParameters, phi: f64) -> f64 {
    params.spot * (params.drift() + phi * params.diffusion()).exp()
}

/// Undiscounted call payoff `max(S_T − K, 0)`.
#[inline]
pub fn call_payoff(terminal: f64, strike: f64) -> f64 {
    (terminal - strike).max(0.0)
}

/// Computes one Monte Carlo estimate of the call price.
///
/// Draws `n_paths` variates from `rng`, averages the call payoffs of the
/// implied terminal prices and discounts by `exp(−r·T)`.
///
/// The estimator is unbiased with variance `O(1/n_paths)`. With
/// `n_paths == 1` the result is exactly that path's discounted payoff.
/// `n_paths == 0` consumes nothing and returns `NaN`; configuration
/// validation rejects it before this point.
///
/// When `σ·√T == 0` every path has the same terminal price, and the result
/// is exactly `exp(−r·T)·max(S·e^{(r−q)T} − K, 0)`. The draws are still
/// consumed.
///
/// # Arguments
///
/// * `params` - Validated pricing parameters
/// * `n_paths` - Number of simulated terminal prices
/// * `rng` - Variate stream, advanced by `n_paths` draws
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::price_once;
/// use pricer_mc::rng::PricerRng;
/// use pricer_mc::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let estimate = price_once(&params, 10_000, &mut rng);
/// assert!(estimate > 0.0);
/// ```
pub fn price_once<R>(params: &PricingParameters, n_paths: usize, rng: &mut R) -> f64
where
    R: VariateSource + ?Sized,
{
    let drift = params.drift();
    let diffusion = params.diffusion();

    if diffusion == 0.0 {
        // Draw count stays `n_paths` so the stream position never depends on σ.
        for _ in 0..n_paths {
            rng.draw();
        }
        if n_paths == 0 {
            return f64::NAN;
        }
        let terminal = params.spot * drift.exp();
        return params.discount_factor() * call_payoff(terminal, params.strike);
    }

    let mut sum = 0.0;
    for _ in 0..n_paths {
        let phi = rng.draw();
        let st = params.spot * (drift + phi * diffusion).exp();
        sum += call_payoff(st, params.strike);
    }

    sum / n_paths as f64 * params.discount_factor()
}

/// Computes `series_len` estimates from one continuing stream.
///
/// Slot `i` is the `i`-th batch in draw order. Consumes exactly
/// `series_len × n_paths` draws.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::price_series;
/// use pricer_mc::rng::PricerRng;
/// use pricer_mc::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let series = price_series(&params, 10, 1_000, &mut rng);
/// assert_eq!(series.len(), 10);
/// ```
pub fn price_series<R>(
    params: &PricingParameters,
    series_len: usize,
    n_paths: usize,
    rng: &mut R,
) -> EstimateSeries
where
    R: VariateSource + ?Sized,
{
    let mut estimates = Vec::with_capacity(series_len);
    for batch in 0..series_len {
        let estimate = price_once(params, n_paths, rng);
        trace!(batch, estimate, "batch priced");
        estimates.push(estimate);
    }
    EstimateSeries::from(estimates)
}

/// Computes `series_len` estimates on the rayon pool.
///
/// The output buffer is pre-sized and index-addressed; slot `i` is priced
/// with its own stream [`PricerRng::stream`]`(base_seed, i)`. The result is
/// therefore identical for any thread count or scheduling, and reproducible
/// for a fixed `base_seed`. It does not match [`price_series`] on a stream
/// seeded with `base_seed`.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::mc::price_series_parallel;
/// use pricer_mc::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
///
/// let a = price_series_parallel(&params, 16, 1_000, 7);
/// let b = price_series_parallel(&params, 16, 1_000, 7);
/// assert_eq!(a, b);
/// ```
pub fn price_series_parallel(
    params: &PricingParameters,
    series_len: usize,
    n_paths: usize,
    base_seed: u64,
) -> EstimateSeries {
    let mut estimates = vec![0.0; series_len];
    estimates
        .par_iter_mut()
        .enumerate()
        .for_each(|(batch, slot)| {
            let mut rng = PricerRng::stream(base_seed, batch as u64);
            *slot = price_once(params, n_paths, &mut rng);
        });
    EstimateSeries::from(estimates)
}
