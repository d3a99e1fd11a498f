//! Black-Scholes-Merton closed form for European options.
//!
//! Used as the reference value the Monte Carlo estimator converges to.
//!
//! # Mathematical Formula
//!
//! ```text
//! d1 = (ln(S/K) + (r − q + σ²/2)·T) / (σ·√T)
//! d2 = d1 − σ·√T
//! C  = S·e^{−qT}·N(d1) − K·e^{−rT}·N(d2)
//! P  = K·e^{−rT}·N(−d2) − S·e^{−qT}·N(−d1)
//! ```
//!
//! When `σ·√T` is zero the model is deterministic and prices collapse to the
//! discounted intrinsic value on the forward.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

use crate::types::PricingParameters;

/// Standard normal CDF, `N(x) = erfc(−x/√2) / 2`.
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal density.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Sensitivities of a European call.
///
/// Theta is the derivative with respect to calendar time (per year), so it
/// is usually negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S.
    pub delta: f64,
    /// ∂²V/∂S².
    pub gamma: f64,
    /// ∂V/∂σ.
    pub vega: f64,
    /// ∂V/∂r.
    pub rho: f64,
    /// ∂V/∂t.
    pub theta: f64,
}

/// Black-Scholes pricer bound to one parameter set.
///
/// `d1`, `d2` and the discount factors are computed once at construction.
///
/// # Examples
///
/// ```rust
/// use pricer_mc::analytical::BlackScholes;
/// use pricer_mc::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
/// let bs = BlackScholes::new(&params);
///
/// assert!((bs.call_price() - 10.4506).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BlackScholes {
    params: PricingParameters,
    d1: f64,
    d2: f64,
    discount: f64,
    dividend_discount: f64,
    sigma_sqrt_t: f64,
}

impl BlackScholes {
    /// Precomputes the closed-form terms for `params`.
    pub fn new(params: &PricingParameters) -> Self {
        let sigma_sqrt_t = params.diffusion();
        let (d1, d2) = if sigma_sqrt_t > 0.0 {
            let d1 = ((params.spot / params.strike).ln()
                + (params.rate - params.dividend_yield + 0.5 * params.volatility * params.volatility)
                    * params.maturity)
                / sigma_sqrt_t;
            (d1, d1 - sigma_sqrt_t)
        } else {
            // Degenerate model: the sign of the forward moneyness decides.
            let moneyness = params.forward() - params.strike;
            let d = if moneyness > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
            (d, d)
        };

        Self {
            params: *params,
            d1,
            d2,
            discount: params.discount_factor(),
            dividend_discount: (-params.dividend_yield * params.maturity).exp(),
            sigma_sqrt_t,
        }
    }

    /// Returns `d1`.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns `d2`.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// European call price.
    pub fn call_price(&self) -> f64 {
        let p = &self.params;
        p.spot * self.dividend_discount * norm_cdf(self.d1)
            - p.strike * self.discount * norm_cdf(self.d2)
    }

    /// European put price.
    pub fn put_price(&self) -> f64 {
        let p = &self.params;
        p.strike * self.discount * norm_cdf(-self.d2)
            - p.spot * self.dividend_discount * norm_cdf(-self.d1)
    }

    /// Call Greeks.
    ///
    /// With `σ·√T == 0` the density terms vanish: gamma and vega are zero
    /// and delta is the discounted in-the-money indicator.
    pub fn call_greeks(&self) -> Greeks {
        let p = &self.params;
        let nd1 = norm_cdf(self.d1);
        let nd2 = norm_cdf(self.d2);
        let pdf_d1 = if self.d1.is_finite() {
            norm_pdf(self.d1)
        } else {
            0.0
        };

        let delta = self.dividend_discount * nd1;
        let (gamma, vega) = if self.sigma_sqrt_t > 0.0 {
            (
                self.dividend_discount * pdf_d1 / (p.spot * self.sigma_sqrt_t),
                p.spot * self.dividend_discount * pdf_d1 * p.maturity.sqrt(),
            )
        } else {
            (0.0, 0.0)
        };
        let rho = p.strike * p.maturity * self.discount * nd2;
        let theta = -p.spot * self.dividend_discount * pdf_d1 * p.volatility
            / (2.0 * p.maturity.sqrt())
            - p.rate * p.strike * self.discount * nd2
            + p.dividend_yield * p.spot * self.dividend_discount * nd1;

        Greeks {
            delta,
            gamma,
            vega,
            rho,
            theta,
        }
    }
}

/// Black-Scholes call price for `params`.
#[inline]
pub fn bs_call_price(params: &PricingParameters) -> f64 {
    BlackScholes::new(params).call_price()
}

/// Black-Scholes put price for `params`.
#[inline]
pub fn bs_put_price(params: &PricingParameters) -> f64 {
    BlackScholes::new(params).put_price()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(s: f64, k: f64, r: f64, q: f64, t: f64, v: f64) -> PricingParameters {
        PricingParameters::new(s, k, r, q, t, v).unwrap()
    }

    #[test]
    fn test_norm_cdf_reference_points() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.96), 0.9750021048517795, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-12);
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_pdf_peak() {
        assert_relative_eq!(norm_pdf(0.0), 0.3989422804014327, epsilon = 1e-15);
    }

    #[test]
    fn test_call_atm_reference() {
        let bs = BlackScholes::new(&params(100.0, 100.0, 0.05, 0.0, 1.0, 0.2));
        assert_relative_eq!(bs.call_price(), 10.450583572185565, epsilon = 1e-9);
        assert_relative_eq!(bs.put_price(), 5.573526022256971, epsilon = 1e-9);
    }

    #[test]
    fn test_call_greeks_atm_reference() {
        let g = BlackScholes::new(&params(100.0, 100.0, 0.05, 0.0, 1.0, 0.2)).call_greeks();
        assert_relative_eq!(g.delta, 0.6368306511756191, epsilon = 1e-9);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-9);
        assert_relative_eq!(g.vega, 37.52403469169379, epsilon = 1e-8);
        assert_relative_eq!(g.rho, 53.232481545376345, epsilon = 1e-8);
        assert_relative_eq!(g.theta, -6.414027546438197, epsilon = 1e-8);
    }

    #[test]
    fn test_delta_short_dated_high_vol() {
        let g = BlackScholes::new(&params(100.0, 100.0, 0.01, 0.0, 0.5, 0.35)).call_greeks();
        assert_relative_eq!(g.delta, 0.557228735645, epsilon = 1e-10);
    }

    #[test]
    fn test_itm_call_and_put() {
        let bs = BlackScholes::new(&params(100.0, 95.0, 0.1, 0.0, 0.25, 0.5));
        assert_relative_eq!(bs.call_price(), 13.695272738608132, epsilon = 1e-9);
        assert_relative_eq!(bs.put_price(), 6.3497143812997265, epsilon = 1e-9);
    }

    #[test]
    fn test_with_dividend_yield() {
        let p = params(100.0, 100.0, 0.05, 0.03, 1.0, 0.2);
        assert_relative_eq!(bs_call_price(&p), 8.652528553942709, epsilon = 1e-9);
        assert_relative_eq!(bs_put_price(&p), 6.7309176491633025, epsilon = 1e-9);
    }

    #[test]
    fn test_put_call_parity() {
        for &(s, k) in &[(80.0, 100.0), (100.0, 100.0), (120.0, 100.0)] {
            let p = params(s, k, 0.04, 0.02, 0.75, 0.3);
            let lhs = bs_call_price(&p) - bs_put_price(&p);
            let rhs = s * (-0.02_f64 * 0.75).exp() - k * (-0.04_f64 * 0.75).exp();
            assert_relative_eq!(lhs, rhs, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_volatility_is_discounted_intrinsic() {
        let p = params(100.0, 90.0, 0.05, 0.01, 2.0, 0.0);
        let expected = p.discount_factor() * (p.forward() - p.strike);
        assert_relative_eq!(bs_call_price(&p), expected, epsilon = 1e-10);

        let otm = params(100.0, 150.0, 0.05, 0.0, 1.0, 0.0);
        assert_eq!(bs_call_price(&otm), 0.0);

        let g = BlackScholes::new(&p).call_greeks();
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.vega, 0.0);
        assert_relative_eq!(g.delta, (-0.01_f64 * 2.0).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_call_increases_with_spot() {
        let mut last = 0.0;
        for s in [60.0, 80.0, 100.0, 120.0, 140.0] {
            let price = bs_call_price(&params(s, 100.0, 0.05, 0.0, 1.0, 0.2));
            assert!(price > last);
            last = price;
        }
    }

    #[test]
    fn test_call_increases_with_volatility() {
        let low = bs_call_price(&params(100.0, 100.0, 0.05, 0.0, 1.0, 0.1));
        let high = bs_call_price(&params(100.0, 100.0, 0.05, 0.0, 1.0, 0.4));
        assert!(high > low);
    }
}
