//! Contract tests for the estimate series.
//!
//! Covers length and ordering, reproducibility from a fixed seed,
//! non-negativity, monotonicity in spot and single-path exactness, with
//! property-based checks across the parameter space.

use pricer_mc::mc::{
    call_payoff, price_once, price_series, price_series_parallel, terminal_price, MonteCarloConfig,
    MonteCarloPricer,
};
use pricer_mc::rng::{PricerRng, VariateSource};
use pricer_mc::types::{PricingError, PricingParameters};
use proptest::prelude::*;

fn atm() -> PricingParameters {
    PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap()
}

#[test]
fn test_reference_length_series() {
    // Reference series length with a reduced path count.
    let config = MonteCarloConfig::builder()
        .n_paths(10)
        .seed(42)
        .build()
        .unwrap();
    let mut pricer = MonteCarloPricer::new(config).unwrap();

    let series = pricer.compute_series(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
    assert_eq!(series.len(), 1_000);
}

#[test]
fn test_fixed_seed_reproduces_identical_sequence() {
    let build = || {
        let config = MonteCarloConfig::builder()
            .n_paths(100)
            .series_len(1_000)
            .seed(123)
            .build()
            .unwrap();
        MonteCarloPricer::new(config).unwrap()
    };

    let a = build().compute_series(100.0, 105.0, 0.02, 0.01, 0.5, 0.3).unwrap();
    let b = build().compute_series(100.0, 105.0, 0.02, 0.01, 0.5, 0.3).unwrap();
    assert_eq!(a.as_slice(), b.as_slice());
}

/// Slot `i` is batch `i` of the draw order, never a sorted view.
#[test]
fn test_order_follows_draw_order() {
    let params = atm();
    let mut rng = PricerRng::from_seed(31);
    let series = price_series(&params, 50, 100, &mut rng);

    let mut replay = PricerRng::from_seed(31);
    for (i, &estimate) in series.iter().enumerate() {
        assert_eq!(estimate, price_once(&params, 100, &mut replay), "slot {}", i);
    }

    let mut sorted = series.as_slice().to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    assert_ne!(sorted.as_slice(), series.as_slice());
}

/// Repeated six-scalar calls on one pricer continue its stream.
#[test]
fn test_repeated_compute_series_continues_stream() {
    let config = MonteCarloConfig::builder()
        .n_paths(200)
        .series_len(25)
        .seed(64)
        .build()
        .unwrap();
    let mut pricer = MonteCarloPricer::new(config).unwrap();

    let first = pricer.compute_series(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
    let second = pricer.compute_series(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
    assert_ne!(first, second);

    let mut rng = PricerRng::from_seed(64);
    let whole = price_series(&atm(), 50, 200, &mut rng);
    assert_eq!(&whole.as_slice()[..25], first.as_slice());
    assert_eq!(&whole.as_slice()[25..], second.as_slice());
}

#[test]
fn test_single_path_estimate_is_that_path() {
    let params = atm();
    let mut rng = PricerRng::from_seed(17);
    let mut peek = rng.clone();

    let estimate = price_once(&params, 1, &mut rng);
    let phi = peek.draw();
    let expected = params.discount_factor() * call_payoff(terminal_price(&params, phi), params.strike);

    assert_eq!(estimate, expected);
}

#[test]
fn test_single_path_series_does_not_error() {
    let config = MonteCarloConfig::builder()
        .n_paths(1)
        .series_len(100)
        .build()
        .unwrap();
    let mut pricer = MonteCarloPricer::new(config).unwrap();
    let series = pricer.compute_series(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
    assert_eq!(series.len(), 100);
    assert!(series.iter().all(|&x| x >= 0.0 && x.is_finite()));
}

#[test]
fn test_free_function_rejects_invalid_inputs() {
    let err = pricer_mc::compute_series(-1.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap_err();
    assert!(matches!(err, PricingError::InvalidParameter { name: "spot", .. }));

    let err = pricer_mc::compute_series(100.0, 0.0, 0.05, 0.0, 1.0, 0.2).unwrap_err();
    assert_eq!(err.parameter(), "strike");

    let err = pricer_mc::compute_series(100.0, 100.0, 0.05, 0.0, -1.0, 0.2).unwrap_err();
    assert_eq!(err.parameter(), "maturity");
}

#[test]
fn test_parallel_and_sequential_agree_statistically() {
    let params = atm();
    let mut rng = PricerRng::from_seed(1);
    let sequential = price_series(&params, 100, 5_000, &mut rng).summary();
    let parallel = price_series_parallel(&params, 100, 5_000, 1).summary();

    let se = (sequential.std_error.powi(2) + parallel.std_error.powi(2)).sqrt();
    assert!(
        (sequential.mean - parallel.mean).abs() < 4.0 * se,
        "sequential {:.4} vs parallel {:.4} (se {:.4})",
        sequential.mean,
        parallel.mean,
        se
    );
}

fn valid_params() -> impl Strategy<Value = PricingParameters> {
    (
        1.0..500.0f64,
        1.0..500.0f64,
        -0.05..0.15f64,
        0.0..0.1f64,
        0.01..5.0f64,
        0.0..1.0f64,
    )
        .prop_map(|(s, k, r, q, t, v)| PricingParameters::new(s, k, r, q, t, v).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every estimate is non-negative and finite for non-extreme inputs.
    #[test]
    fn prop_estimates_non_negative_and_finite(params in valid_params(), seed in any::<u64>()) {
        let mut rng = PricerRng::from_seed(seed);
        let series = price_series(&params, 5, 200, &mut rng);
        prop_assert_eq!(series.len(), 5);
        for &x in &series {
            prop_assert!(x >= 0.0 && x.is_finite(), "estimate {}", x);
        }
    }

    /// With common random numbers a higher spot never lowers the estimate.
    #[test]
    fn prop_monotone_in_spot(
        params in valid_params(),
        bump in 0.0..100.0f64,
        seed in any::<u64>(),
    ) {
        let higher = params.with_spot(params.spot + bump);
        let low = price_once(&params, 500, &mut PricerRng::from_seed(seed));
        let high = price_once(&higher, 500, &mut PricerRng::from_seed(seed));
        prop_assert!(high >= low, "spot {} -> {}, low {} high {}", params.spot, higher.spot, low, high);
    }

    /// Zero volatility removes all randomness.
    #[test]
    fn prop_zero_volatility_exact(params in valid_params(), seed in any::<u64>()) {
        let params = PricingParameters { volatility: 0.0, ..params };
        let expected = params.discount_factor() * (params.forward() - params.strike).max(0.0);

        let mut rng = PricerRng::from_seed(seed);
        let series = price_series(&params, 4, 50, &mut rng);
        for &x in &series {
            prop_assert_eq!(x, expected);
        }
    }

    /// Rejected inputs never consume draws.
    #[test]
    fn prop_invalid_volatility_rejected(vol in -5.0..-1e-9f64, seed in any::<u64>()) {
        let config = MonteCarloConfig::builder()
            .n_paths(10)
            .series_len(2)
            .seed(seed)
            .build()
            .unwrap();
        let mut pricer = MonteCarloPricer::new(config.clone()).unwrap();
        prop_assert!(pricer.compute_series(100.0, 100.0, 0.05, 0.0, 1.0, vol).is_err());

        let mut fresh = MonteCarloPricer::new(config).unwrap();
        prop_assert_eq!(pricer.price_series(&atm()), fresh.price_series(&atm()));
    }
}
