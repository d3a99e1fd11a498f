//! Error types for pricing input validation.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Raised before any simulation work begins, so a failed call never
/// advances a variate stream.
///
/// # Examples
/// ```
/// use pricer_mc::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "spot",
///     value: -1.0,
///     reason: "must be strictly positive",
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'spot' = -1: must be strictly positive"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A pricing parameter violated its domain constraint.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },
}

impl PricingError {
    /// Returns the name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { name, .. } => *name,
        }
    }
}
