//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod analytic;
pub mod check;
pub mod simulate;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::Args;
use pricer_mc::types::PricingParameters;

use crate::Result;

/// Market inputs shared by `simulate` and `analytic`.
#[derive(Args, Debug, Clone, Copy)]
pub struct MarketArgs {
    /// Spot price of the underlying
    #[arg(short, long)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(short = 'q', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub dividend_yield: f64,

    /// Time to expiry in years
    #[arg(short = 't', long)]
    pub maturity: f64,

    /// Annualised volatility
    #[arg(long)]
    pub volatility: f64,
}

impl MarketArgs {
    /// Validates the inputs into pricing parameters.
    pub fn to_params(&self) -> Result<PricingParameters> {
        Ok(PricingParameters::new(
            self.spot,
            self.strike,
            self.rate,
            self.dividend_yield,
            self.maturity,
            self.volatility,
        )?)
    }
}

/// Opens `path` for writing, or stdout when `None`.
pub(crate) fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
