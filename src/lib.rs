//! Depender: distance-based independence testing in pure Rust.
//!
//! Depender provides independence test statistics, synthetic simulation
//! benchmarks with known dependency structure, and empirical power
//! estimation tying the two together.
//!
//! # Quick Start
//!
//! ```
//! use depender::prelude::*;
//!
//! // Estimate how often unbiased distance correlation detects a noisy
//! // linear relationship at n = 20.
//! let config = PowerConfig::default()
//!     .with_num_samples(20)
//!     .with_repeats(60)
//!     .with_random_state(42);
//!
//! let estimate = power(&DCorr::unbiased(), &LinearSim::default(), &config)
//!     .expect("valid configuration");
//! assert!((0.0..=1.0).contains(&estimate));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`distance`]: Pairwise distance matrices and centering transforms
//! - [`independence`]: Independence tests (distance correlation family,
//!   linear correlation family) with permutation p-values
//! - [`simulations`]: Paired-sample generators with known dependency
//!   structure (linear, w-shaped, circles, spirals, null structures, ...)
//! - [`power`]: Empirical power estimation of a test against a simulation
//!
//! # Design
//!
//! Tests implement [`independence::IndependenceTest`] and simulations
//! implement [`simulations::Simulation`]; [`power::power`] is generic
//! over both, so any test can be benchmarked against any generator.
//! All statistics are plain `f32` computations with no global state;
//! randomness always flows through an explicit, seedable RNG.

pub mod distance;
pub mod error;
pub mod independence;
pub mod power;
pub mod prelude;
pub mod primitives;
pub mod simulations;
