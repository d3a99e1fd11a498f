//! # Random Number Generation Infrastructure
//!
//! Standard-normal variate streams for the Monte Carlo kernel.
//!
//! ## Design Rationale
//!
//! - **Explicit streams**: generators are values owned by the caller and passed
//!   into the engine by `&mut`, never hidden process-wide globals
//! - **Reproducibility**: every stream is seeded; the same seed and the same
//!   call order give the same draws
//! - **Independence**: parallel workers obtain disjoint streams through
//!   [`PricerRng::stream`]
//!
//! ## Module Structure
//!
//! - [`VariateSource`]: the draw trait consumed by the engine
//! - [`PricerRng`]: the seeded generator, with [`DEFAULT_SEED`]
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_mc::rng::{PricerRng, VariateSource};
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.draw();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill(&mut buffer);
//! ```

mod prng;
mod source;

pub use prng::{PricerRng, DEFAULT_SEED};
pub use source::VariateSource;
