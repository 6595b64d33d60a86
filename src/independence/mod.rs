//! Independence test statistics.
//!
//! Every test implements [`IndependenceTest`]: a scalar statistic over a
//! pair of sample matrices, plus a permutation p-value built on top of it.
//!
//! # Tests
//!
//! - [`DCorr`]: distance-correlation family (biased, unbiased, Mantel)
//! - [`RVCorr`]: linear-correlation family (Pearson, RV coefficient, CCA)
//!
//! # Example
//!
//! ```
//! use depender::independence::{DCorr, IndependenceTest};
//! use depender::primitives::Matrix;
//!
//! let x = Matrix::from_vec(5, 1, vec![1.0, 2.0, 3.0, 4.0, 5.0]).expect("valid shape");
//! let y = Matrix::from_vec(5, 1, vec![2.0, 4.0, 6.0, 8.0, 10.0]).expect("valid shape");
//!
//! let stat = DCorr::biased().statistic(&x, &y).expect("valid samples");
//! assert!((stat - 1.0).abs() < 1e-4); // perfectly dependent
//! ```

pub mod dcorr;
pub mod rv_corr;

pub use dcorr::{DCorr, DCorrVariant};
pub use rv_corr::{RVCorr, RVVariant};

use crate::error::{DependerError, Result};
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Result of an independence test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Observed test statistic
    pub statistic: f32,

    /// p-value
    pub pvalue: f32,
}

/// Configuration for the permutation null distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermutationConfig {
    /// Number of row permutations of `y`
    pub num_permutations: usize,

    /// Seed for reproducible permutations; entropy-seeded when `None`
    pub random_state: Option<u64>,
}

impl Default for PermutationConfig {
    fn default() -> Self {
        Self {
            num_permutations: 1000,
            random_state: None,
        }
    }
}

impl PermutationConfig {
    /// Sets the number of permutations.
    #[must_use]
    pub fn with_num_permutations(mut self, num_permutations: usize) -> Self {
        self.num_permutations = num_permutations;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }
}

/// A statistical test of independence between paired samples.
///
/// `x` and `y` are `n x p` and `n x q` sample matrices with matching row
/// counts; rows are paired observations.
pub trait IndependenceTest {
    /// Short name of the test variant (e.g. "dcorr", "pearson").
    fn name(&self) -> &'static str;

    /// Computes the test statistic for paired samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample matrices are empty, have mismatched
    /// row counts, or violate variant-specific constraints.
    fn statistic(&self, x: &Matrix<f32>, y: &Matrix<f32>) -> Result<f32>;

    /// Computes the statistic and a permutation p-value.
    ///
    /// The null distribution is built by shuffling the rows of `y`; the
    /// p-value is the fraction of permuted statistics at least as extreme
    /// (in absolute value) as the observed one, with the add-one
    /// correction that keeps it strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the statistic fails or the configuration is invalid.
    fn p_value(
        &self,
        x: &Matrix<f32>,
        y: &Matrix<f32>,
        config: &PermutationConfig,
    ) -> Result<TestResult> {
        permutation_p_value(self, x, y, config)
    }
}

/// Permutation p-value for any independence test.
///
/// # Errors
///
/// Returns an error if `num_permutations` is zero or the statistic fails.
pub fn permutation_p_value<T: IndependenceTest + ?Sized>(
    test: &T,
    x: &Matrix<f32>,
    y: &Matrix<f32>,
    config: &PermutationConfig,
) -> Result<TestResult> {
    if config.num_permutations == 0 {
        return Err(DependerError::invalid_parameter(
            "num_permutations",
            config.num_permutations,
            "> 0",
        ));
    }

    let observed = test.statistic(x, y)?;

    let mut rng = match config.random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = y.n_rows();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut at_least_as_extreme = 0_usize;

    for _ in 0..config.num_permutations {
        indices.shuffle(&mut rng);
        let y_permuted = y.select_rows(&indices);
        let stat = test.statistic(x, &y_permuted)?;
        if stat.abs() >= observed.abs() {
            at_least_as_extreme += 1;
        }
    }

    let pvalue = (at_least_as_extreme + 1) as f32 / (config.num_permutations + 1) as f32;
    Ok(TestResult {
        statistic: observed,
        pvalue,
    })
}

/// Validates that two sample matrices are a usable paired sample.
pub(crate) fn validate_paired_samples(x: &Matrix<f32>, y: &Matrix<f32>) -> Result<()> {
    if x.n_rows() == 0 || x.n_cols() == 0 {
        return Err(DependerError::empty_input("sample matrix x"));
    }
    if y.n_rows() == 0 || y.n_cols() == 0 {
        return Err(DependerError::empty_input("sample matrix y"));
    }
    if x.n_rows() != y.n_rows() {
        return Err(DependerError::DimensionMismatch {
            expected: format!("{} samples in x", x.n_rows()),
            actual: format!("{} samples in y", y.n_rows()),
        });
    }
    Ok(())
}
