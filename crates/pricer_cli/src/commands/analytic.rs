//! Analytic command implementation
//!
//! Black-Scholes call and put prices with call Greeks.

use pricer_mc::analytical::{BlackScholes, Greeks};
use pricer_mc::types::PricingParameters;
use serde::Serialize;
use tracing::info;

use super::{open_sink, MarketArgs};
use crate::config::OutputFormat;
use crate::output::{self, fmt_f64, Report};
use crate::Result;

/// Closed-form values for one parameter set.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticReport {
    pub parameters: PricingParameters,
    pub d1: f64,
    pub d2: f64,
    pub call: f64,
    pub put: f64,
    pub greeks: Greeks,
}

impl AnalyticReport {
    /// Evaluates the closed form at `params`.
    pub fn new(params: &PricingParameters) -> Self {
        let bs = BlackScholes::new(params);
        Self {
            parameters: *params,
            d1: bs.d1(),
            d2: bs.d2(),
            call: bs.call_price(),
            put: bs.put_price(),
            greeks: bs.call_greeks(),
        }
    }
}

impl Report for AnalyticReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let g = &self.greeks;
        vec![
            ("d1", fmt_f64(self.d1)),
            ("d2", fmt_f64(self.d2)),
            ("Call", fmt_f64(self.call)),
            ("Put", fmt_f64(self.put)),
            ("Delta", fmt_f64(g.delta)),
            ("Gamma", fmt_f64(g.gamma)),
            ("Vega", fmt_f64(g.vega)),
            ("Rho", fmt_f64(g.rho)),
            ("Theta", fmt_f64(g.theta)),
        ]
    }
}

/// Run the analytic command
pub fn run(market: &MarketArgs, format: OutputFormat) -> Result<()> {
    let params = market.to_params()?;
    let report = AnalyticReport::new(&params);

    info!(call = report.call, put = report.put, "Black-Scholes evaluated");

    let mut stdout = open_sink(None)?;
    output::render(&report, format, &mut stdout)
}
