//! Linear-correlation family of independence statistics.
//!
//! Covers the classical baselines against which distance-based tests are
//! benchmarked:
//!
//! - **pearson**: signed linear correlation of two univariate samples
//! - **rv**: the RV coefficient, a multivariate generalization of squared
//!   Pearson correlation built from covariance matrices
//! - **cca**: the largest canonical correlation between two sample spaces
//!
//! For univariate samples the RV coefficient reduces to `r^2` and the
//! canonical correlation to `|r|`.
//!
//! # References
//!
//! - Robert & Escoufier (1976): "A unifying tool for linear multivariate
//!   statistical methods: the RV-coefficient"
//! - Hotelling (1936): "Relations between two sets of variates"

use crate::error::{DependerError, Result};
use crate::independence::{validate_paired_samples, IndependenceTest};
use crate::primitives::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Variant of the linear-correlation statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RVVariant {
    /// Signed Pearson correlation (univariate samples only).
    Pearson,
    /// RV coefficient.
    Rv,
    /// Largest canonical correlation.
    Cca,
}

/// Linear-correlation independence test.
///
/// # Examples
///
/// ```
/// use depender::independence::{IndependenceTest, RVCorr, RVVariant};
/// use depender::primitives::Matrix;
///
/// let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("valid shape");
/// let y = Matrix::from_vec(4, 1, vec![2.0, 4.0, 6.0, 8.0]).expect("valid shape");
///
/// let pearson = RVCorr::new(RVVariant::Pearson);
/// let r = pearson.statistic(&x, &y).expect("valid samples");
/// assert!((r - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RVCorr {
    variant: RVVariant,
}

impl Default for RVCorr {
    fn default() -> Self {
        Self::new(RVVariant::Rv)
    }
}

impl RVCorr {
    /// Creates a linear-correlation test with the given variant.
    #[must_use]
    pub fn new(variant: RVVariant) -> Self {
        Self { variant }
    }

    /// Signed Pearson correlation (univariate samples only).
    #[must_use]
    pub fn pearson() -> Self {
        Self::new(RVVariant::Pearson)
    }

    /// RV coefficient.
    #[must_use]
    pub fn rv() -> Self {
        Self::new(RVVariant::Rv)
    }

    /// Largest canonical correlation.
    #[must_use]
    pub fn cca() -> Self {
        Self::new(RVVariant::Cca)
    }

    /// Returns the configured variant.
    #[must_use]
    pub fn variant(&self) -> RVVariant {
        self.variant
    }
}

impl IndependenceTest for RVCorr {
    fn name(&self) -> &'static str {
        match self.variant {
            RVVariant::Pearson => "pearson",
            RVVariant::Rv => "rv",
            RVVariant::Cca => "cca",
        }
    }

    fn statistic(&self, x: &Matrix<f32>, y: &Matrix<f32>) -> Result<f32> {
        validate_paired_samples(x, y)?;
        if x.n_rows() < 2 {
            return Err(DependerError::invalid_parameter(
                "num_samples",
                x.n_rows(),
                ">= 2",
            ));
        }

        match self.variant {
            RVVariant::Pearson => pearson_statistic(x, y),
            RVVariant::Rv => rv_statistic(x, y),
            RVVariant::Cca => cca_statistic(x, y),
        }
    }
}

fn pearson_statistic(x: &Matrix<f32>, y: &Matrix<f32>) -> Result<f32> {
    if x.n_cols() != 1 || y.n_cols() != 1 {
        return Err(DependerError::invalid_parameter(
            "num_dimensions",
            format!("({}, {})", x.n_cols(), y.n_cols()),
            "(1, 1) for the pearson variant",
        ));
    }

    let n = x.n_rows();
    let xs = x.column(0);
    let ys = y.column(0);
    let x_mean = xs.mean();
    let y_mean = ys.mean();

    let mut cov_sum = 0.0_f32;
    let mut x_var_sum = 0.0_f32;
    let mut y_var_sum = 0.0_f32;
    for i in 0..n {
        let x_diff = xs[i] - x_mean;
        let y_diff = ys[i] - y_mean;
        cov_sum += x_diff * y_diff;
        x_var_sum += x_diff * x_diff;
        y_var_sum += y_diff * y_diff;
    }

    let denom = x_var_sum * y_var_sum;
    if denom <= 0.0 {
        return Ok(0.0);
    }
    Ok(cov_sum / denom.sqrt())
}

fn rv_statistic(x: &Matrix<f32>, y: &Matrix<f32>) -> Result<f32> {
    let xc = center_columns(x);
    let yc = center_columns(y);
    let sxx = covariance_of(&xc, &xc)?;
    let syy = covariance_of(&yc, &yc)?;
    let sxy = covariance_of(&xc, &yc)?;

    // tr(Sxy Syx) = sum of squared cross-covariances; likewise for the
    // symmetric blocks.
    let cross: f32 = sxy.as_slice().iter().map(|v| v * v).sum();
    let var_x: f32 = sxx.as_slice().iter().map(|v| v * v).sum();
    let var_y: f32 = syy.as_slice().iter().map(|v| v * v).sum();

    let denom = var_x * var_y;
    if denom <= 0.0 {
        return Ok(0.0);
    }
    Ok(cross / denom.sqrt())
}

fn cca_statistic(x: &Matrix<f32>, y: &Matrix<f32>) -> Result<f32> {
    let xc = center_columns(x);
    let yc = center_columns(y);
    let mut sxx = covariance_of(&xc, &xc)?;
    let mut syy = covariance_of(&yc, &yc)?;
    let sxy = covariance_of(&xc, &yc)?;
    let syx = sxy.transpose();

    // Diagonal loading keeps the solves well posed for degenerate samples.
    add_ridge(&mut sxx);
    add_ridge(&mut syy);

    // M = Sxx^-1 Sxy Syy^-1 Syx; its largest eigenvalue is the squared
    // leading canonical correlation.
    let a = solve_columns(&sxx, &sxy)?;
    let b = solve_columns(&syy, &syx)?;
    let m = a.matmul(&b)?;

    let lambda = largest_eigenvalue(&m)?;
    Ok(lambda.clamp(0.0, 1.0).sqrt())
}

/// Subtracts each column's mean.
fn center_columns(data: &Matrix<f32>) -> Matrix<f32> {
    let n = data.n_rows();
    let p = data.n_cols();
    let mut centered = Matrix::zeros(n, p);
    for j in 0..p {
        let mean = data.column(j).mean();
        for i in 0..n {
            centered.set(i, j, data.get(i, j) - mean);
        }
    }
    centered
}

/// Covariance block A^T B / n for two column-centered matrices.
fn covariance_of(a: &Matrix<f32>, b: &Matrix<f32>) -> Result<Matrix<f32>> {
    let n = a.n_rows() as f32;
    let block = a.transpose().matmul(b)?;
    Ok(block.mul_scalar(1.0 / n))
}

fn add_ridge(m: &mut Matrix<f32>) {
    let p = m.n_rows();
    let mean_diag = (0..p).map(|i| m.get(i, i)).sum::<f32>() / p as f32;
    let ridge = 1e-6 * (1.0 + mean_diag);
    for i in 0..p {
        m.set(i, i, m.get(i, i) + ridge);
    }
}

/// Solves `lhs * X = rhs` column by column via Cholesky.
fn solve_columns(lhs: &Matrix<f32>, rhs: &Matrix<f32>) -> Result<Matrix<f32>> {
    let rows = rhs.n_rows();
    let cols = rhs.n_cols();
    let mut solution = Matrix::zeros(rows, cols);
    for j in 0..cols {
        let col = lhs.cholesky_solve(&rhs.column(j))?;
        for i in 0..rows {
            solution.set(i, j, col[i]);
        }
    }
    Ok(solution)
}

/// Largest eigenvalue of a small square matrix via power iteration.
fn largest_eigenvalue(m: &Matrix<f32>) -> Result<f32> {
    let p = m.n_rows();
    if p == 0 {
        return Ok(0.0);
    }

    let mut v = Vector::from_vec(vec![1.0_f32; p]);
    for _ in 0..100 {
        let next = m.matvec(&v)?;
        let norm = next.norm();
        if norm < 1e-12 {
            return Ok(0.0);
        }
        v = Vector::from_vec(next.iter().map(|&c| c / norm).collect());
    }

    let mv = m.matvec(&v)?;
    Ok(v.dot(&mv) / v.dot(&v))
}

#[cfg(test)]
#[path = "rv_corr_tests.rs"]
mod tests;
