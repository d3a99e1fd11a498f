//! Simulate command implementation
//!
//! Prices an estimate series, summarises it and compares the mean with the
//! Black-Scholes value.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use pricer_mc::analytical::bs_call_price;
use pricer_mc::mc::{EstimateSeries, ExecutionMode, MonteCarloPricer, SeriesSummary};
use pricer_mc::types::PricingParameters;
use serde::Serialize;
use tracing::{info, warn};

use super::{open_sink, MarketArgs};
use crate::config::CliConfig;
use crate::output::{self, fmt_f64, Report};
use crate::Result;

/// Outcome of one `simulate` run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub parameters: PricingParameters,
    pub n_paths: usize,
    pub series_len: usize,
    /// Seed the stream actually started from.
    pub seed: u64,
    pub execution: ExecutionMode,
    pub summary: SeriesSummary,
    pub black_scholes: f64,
    /// Distance of the mean from `black_scholes` in standard errors.
    pub z_score: f64,
    pub elapsed_ms: f64,
}

impl Report for SimulationReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let s = &self.summary;
        vec![
            ("Estimates", s.count.to_string()),
            ("Paths per estimate", self.n_paths.to_string()),
            ("Seed", self.seed.to_string()),
            ("Execution", format!("{:?}", self.execution).to_lowercase()),
            ("Mean", fmt_f64(s.mean)),
            ("Variance", fmt_f64(s.variance)),
            ("Std dev", fmt_f64(s.std_dev)),
            ("Std error", fmt_f64(s.std_error)),
            ("95% CI half-width", fmt_f64(s.confidence_95())),
            ("Min", fmt_f64(s.min)),
            ("Max", fmt_f64(s.max)),
            ("Non-finite", s.non_finite.to_string()),
            ("Black-Scholes", fmt_f64(self.black_scholes)),
            ("Z-score", format!("{:.3}", self.z_score)),
            ("Elapsed (ms)", format!("{:.1}", self.elapsed_ms)),
        ]
    }
}

/// Prices a series for `params` under `config`.
pub fn simulate(
    config: &CliConfig,
    params: &PricingParameters,
) -> Result<(SimulationReport, EstimateSeries)> {
    let mut pricer = MonteCarloPricer::new(config.to_mc_config()?)?;
    let seed = pricer.rng().seed();

    let start = Instant::now();
    let series = pricer.price_series(params);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    let summary = series.summary();
    let black_scholes = bs_call_price(params);
    let z_score = summary.z_score(black_scholes);

    let report = SimulationReport {
        parameters: *params,
        n_paths: config.n_paths,
        series_len: config.series_len,
        seed,
        execution: config.execution(),
        summary,
        black_scholes,
        z_score,
        elapsed_ms,
    };
    Ok((report, series))
}

/// Run the simulate command
pub fn run(config: &CliConfig, market: &MarketArgs, series_output: Option<&Path>) -> Result<()> {
    let params = market.to_params()?;

    info!("Starting simulation...");
    info!("  Paths per estimate: {}", config.n_paths);
    info!("  Series length: {}", config.series_len);
    info!("  Execution: {:?}", config.execution());

    let (report, series) = simulate(config, &params)?;

    info!(
        mean = report.summary.mean,
        std_error = report.summary.std_error,
        elapsed_ms = report.elapsed_ms,
        "Simulation complete"
    );
    if report.z_score.abs() > 4.0 {
        warn!(
            z_score = report.z_score,
            "Series mean is far from the Black-Scholes value"
        );
    }

    let mut stdout = open_sink(None)?;
    output::render(&report, config.format, &mut stdout)?;

    if let Some(path) = series_output {
        let mut sink = open_sink(Some(path))?;
        output::write_series(&series, config.format, &mut sink)?;
        sink.flush()?;
        info!("Wrote {} estimates to {}", series.len(), path.display());
    }

    Ok(())
}
