//! Check command implementation
//!
//! Prints the resolved configuration and the thread pool size.

use pricer_mc::rng::DEFAULT_SEED;
use serde::Serialize;
use tracing::info;

use super::open_sink;
use crate::config::CliConfig;
use crate::output::{self, Report};
use crate::Result;

/// Resolved settings as a simulation would see them.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    #[serde(flatten)]
    pub config: CliConfig,
    pub effective_seed: u64,
    pub threads: usize,
    pub version: &'static str,
}

impl CheckReport {
    /// Captures `config` together with the runtime environment.
    pub fn new(config: &CliConfig) -> Self {
        Self {
            config: config.clone(),
            effective_seed: config.seed.unwrap_or(DEFAULT_SEED),
            threads: rayon::current_num_threads(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Report for CheckReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let c = &self.config;
        vec![
            ("Version", self.version.to_string()),
            ("Paths per estimate", c.n_paths.to_string()),
            ("Series length", c.series_len.to_string()),
            (
                "Seed",
                match c.seed {
                    Some(seed) => seed.to_string(),
                    None => format!("{} (default)", self.effective_seed),
                },
            ),
            ("Execution", format!("{:?}", c.execution()).to_lowercase()),
            ("Threads", self.threads.to_string()),
            ("Log level", c.log_level.to_string()),
            ("Format", c.format.to_string()),
        ]
    }
}

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    // Validates the sizes once more so `check` fails exactly when `simulate` would.
    config.to_mc_config()?;

    let report = CheckReport::new(config);
    let mut stdout = open_sink(None)?;
    output::render(&report, config.format, &mut stdout)?;

    info!("Configuration OK");
    Ok(())
}
