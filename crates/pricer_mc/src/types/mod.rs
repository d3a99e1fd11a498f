//! Core parameter and error types.
//!
//! This module provides:
//! - `params`: [`PricingParameters`], the validated, immutable market and contract inputs
//! - `error`: [`PricingError`], raised when inputs fail validation

pub mod error;
pub mod params;

pub use error::PricingError;
pub use params::PricingParameters;
