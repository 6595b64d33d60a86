//! Empirical power estimation for independence tests.
//!
//! Power is the probability that a test correctly rejects the null
//! hypothesis of independence when the data-generating process is in
//! fact dependent. It is estimated by sampling:
//!
//! ```text
//! for each repeat:
//!     (x, y)  <- simulation                  alternative draw
//!     y'      <- row permutation of y        null draw
//!     record statistic(x, y) and statistic(x, y')
//! cutoff = ceil(repeats * (1 - alpha))-th order statistic of the null draws
//! power  = fraction of alternative draws above the cutoff
//! ```
//!
//! Permuting the rows of `y` breaks any pairing with `x` while keeping
//! both marginals intact, so the permuted statistics sample the test's
//! null distribution at the same marginals and sample size.
//!
//! # Example
//!
//! ```
//! use depender::independence::DCorr;
//! use depender::power::{power, PowerConfig};
//! use depender::simulations::LinearSim;
//!
//! let config = PowerConfig::default()
//!     .with_num_samples(20)
//!     .with_repeats(50)
//!     .with_random_state(0);
//! let estimate = power(&DCorr::biased(), &LinearSim::default(), &config)
//!     .expect("valid configuration");
//! assert!((0.0..=1.0).contains(&estimate));
//! ```

use crate::error::{DependerError, Result};
use crate::independence::IndependenceTest;
use crate::simulations::Simulation;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Configuration for a power estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerConfig {
    /// Observations per simulated data set
    pub num_samples: usize,

    /// Input dimensionality passed to the simulation
    pub num_dimensions: usize,

    /// Number of simulated data sets
    pub repeats: usize,

    /// Rejection level
    pub alpha: f32,

    /// Seed for reproducible estimates; entropy-seeded when `None`
    pub random_state: Option<u64>,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            num_samples: 100,
            num_dimensions: 1,
            repeats: 1000,
            alpha: 0.05,
            random_state: None,
        }
    }
}

impl PowerConfig {
    /// Sets the number of observations per simulated data set.
    #[must_use]
    pub fn with_num_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Sets the input dimensionality.
    #[must_use]
    pub fn with_num_dimensions(mut self, num_dimensions: usize) -> Self {
        self.num_dimensions = num_dimensions;
        self
    }

    /// Sets the number of simulated data sets.
    #[must_use]
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Sets the rejection level.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.num_samples < 4 {
            return Err(DependerError::invalid_parameter(
                "num_samples",
                self.num_samples,
                ">= 4",
            ));
        }
        if self.num_dimensions == 0 {
            return Err(DependerError::invalid_parameter(
                "num_dimensions",
                self.num_dimensions,
                "> 0",
            ));
        }
        if self.repeats == 0 {
            return Err(DependerError::invalid_parameter("repeats", self.repeats, "> 0"));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(DependerError::invalid_parameter(
                "alpha",
                self.alpha,
                "0 < alpha < 1",
            ));
        }
        Ok(())
    }
}

/// Estimates the power of `test` against `simulation`.
///
/// Returns the empirical rejection rate in `[0, 1]`. With a fixed
/// `random_state` the estimate is deterministic, and identical whether
/// or not the `parallel` feature is enabled (each repeat owns its RNG
/// stream).
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the statistic
/// fails on a simulated data set.
pub fn power<T, S>(test: &T, simulation: &S, config: &PowerConfig) -> Result<f32>
where
    T: IndependenceTest + Sync,
    S: Simulation + Sync,
{
    config.validate()?;

    let draws = sample_distributions(test, simulation, config)?;
    let mut null_stats: Vec<f32> = draws.iter().map(|d| d.0).collect();
    let alternative_stats: Vec<f32> = draws.iter().map(|d| d.1).collect();

    null_stats.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let repeats = config.repeats;
    let cutoff_index =
        ((repeats as f32 * (1.0 - config.alpha)).ceil() as usize).min(repeats - 1);
    let cutoff = null_stats[cutoff_index];

    let rejections = alternative_stats.iter().filter(|&&s| s > cutoff).count();
    Ok(rejections as f32 / repeats as f32)
}

/// One (null, alternative) statistic pair per repeat.
fn sample_distributions<T, S>(
    test: &T,
    simulation: &S,
    config: &PowerConfig,
) -> Result<Vec<(f32, f32)>>
where
    T: IndependenceTest + Sync,
    S: Simulation + Sync,
{
    #[cfg(feature = "parallel")]
    return (0..config.repeats)
        .into_par_iter()
        .map(|rep| single_repeat(test, simulation, config, rep))
        .collect();

    #[cfg(not(feature = "parallel"))]
    (0..config.repeats)
        .map(|rep| single_repeat(test, simulation, config, rep))
        .collect()
}

fn single_repeat<T, S>(
    test: &T,
    simulation: &S,
    config: &PowerConfig,
    rep: usize,
) -> Result<(f32, f32)>
where
    T: IndependenceTest,
    S: Simulation,
{
    let mut rng = match config.random_state {
        // Golden-ratio mixing gives each repeat its own stream.
        Some(seed) => StdRng::seed_from_u64(
            seed ^ (rep as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15),
        ),
        None => StdRng::from_entropy(),
    };

    let (x, y) = simulation.sample(config.num_samples, config.num_dimensions, &mut rng)?;

    let mut indices: Vec<usize> = (0..config.num_samples).collect();
    indices.shuffle(&mut rng);
    let y_permuted = y.select_rows(&indices);

    let null_stat = test.statistic(&x, &y_permuted)?;
    let alternative_stat = test.statistic(&x, &y)?;
    Ok((null_stat, alternative_stat))
}

#[cfg(test)]
#[path = "power_tests.rs"]
mod tests;
