//! Market and contract inputs for a single-underlying European call.

use super::error::PricingError;

/// Pricing parameters for a European call under Black-Scholes dynamics.
///
/// Immutable once constructed. [`PricingParameters::new`] validates every
/// field; values built with a struct literal can be checked with
/// [`PricingParameters::validate`].
///
/// # Model
///
/// Under the risk-neutral measure the terminal price is
/// ```text
/// S_T = S_0 · exp((r − q − σ²/2)·T + σ·√T·Z),   Z ~ N(0, 1)
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_mc::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 0.05, 0.0, 1.0, 0.2).unwrap();
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// assert!(PricingParameters::new(-100.0, 100.0, 0.05, 0.0, 1.0, 0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingParameters {
    /// Current underlying price (S₀).
    pub spot: f64,
    /// Option strike (K).
    pub strike: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Continuous dividend yield (q).
    pub dividend_yield: f64,
    /// Time to expiry in years (T).
    pub maturity: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
}

impl PricingParameters {
    /// Creates validated pricing parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidParameter`] if:
    /// - any input is NaN or infinite
    /// - `spot`, `strike` or `maturity` is not strictly positive
    /// - `volatility` is negative
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        maturity: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            rate,
            dividend_yield,
            maturity,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field against its domain constraint.
    ///
    /// Fields are checked in declaration order; the first violation is returned.
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("dividend_yield", self.dividend_yield),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }

        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
        ] {
            if value <= 0.0 {
                return Err(PricingError::InvalidParameter {
                    name,
                    value,
                    reason: "must be strictly positive",
                });
            }
        }

        if self.volatility < 0.0 {
            return Err(PricingError::InvalidParameter {
                name: "volatility",
                value: self.volatility,
                reason: "must be non-negative",
            });
        }

        Ok(())
    }

    /// Discount factor `exp(−r·T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Log-space drift over the life of the option, `(r − q − σ²/2)·T`.
    #[inline]
    pub fn drift(&self) -> f64 {
        (self.rate - self.dividend_yield - 0.5 * self.volatility * self.volatility) * self.maturity
    }

    /// Terminal standard deviation of the log price, `σ·√T`.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// Risk-neutral forward price `S₀·exp((r − q)·T)`.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate - self.dividend_yield) * self.maturity).exp()
    }

    /// Returns a copy with a different spot, without re-validating.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }
}
