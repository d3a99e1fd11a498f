//! Analytical (closed-form) solutions for option pricing.
//!
//! This module provides the Black-Scholes-Merton formulas used to verify
//! Monte Carlo convergence.
//!
//! # Usage
//!
//! ```rust
//! use pricer_mc::analytical::{bs_call_price, BlackScholes};
//! use pricer_mc::types::PricingParameters;
//!
//! let params = PricingParameters::new(100.0, 95.0, 0.1, 0.0, 0.25, 0.5).unwrap();
//!
//! let price = bs_call_price(&params);
//! let greeks = BlackScholes::new(&params).call_greeks();
//! assert!(price > 0.0 && greeks.delta > 0.0);
//! ```

pub mod black_scholes;

pub use black_scholes::{bs_call_price, bs_put_price, norm_cdf, norm_pdf, BlackScholes, Greeks};
