//! Pairwise distance matrices and centering transforms.
//!
//! Distance-based independence statistics are inner products of centered
//! pairwise distance matrices. The centering scheme determines which
//! statistic falls out:
//!
//! ```text
//! Biased    A_ij = d_ij - rowmean_i - colmean_j + grandmean
//! Unbiased  A_ij = d_ij - colsum_j/(n-2) - rowsum_i/(n-2)
//!                  + totalsum/((n-1)(n-2)),  for i != j; A_ii = 0
//! Mantel    A_ij = d_ij - offdiagmean,       for i != j; A_ii = 0
//! ```
//!
//! The unbiased scheme is the U-centering of Székely & Rizzo (2014),
//! which removes the O(1/n) bias of the classic double centering.
//!
//! # References
//!
//! - Székely, Rizzo & Bakirov (2007): "Measuring and testing dependence
//!   by correlation of distances"
//! - Székely & Rizzo (2014): "Partial distance correlation with methods
//!   for dissimilarities"

use crate::error::{DependerError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Centering transform applied to a pairwise distance matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenteringScheme {
    /// Classic double centering (biased distance covariance).
    Biased,
    /// U-centering (unbiased distance covariance).
    Unbiased,
    /// Off-diagonal demeaning (Mantel statistic).
    Mantel,
}

/// Computes the `n x n` Euclidean distance matrix of an `n x d` sample matrix.
///
/// # Errors
///
/// Returns an error if the sample matrix has no rows or no columns.
///
/// # Examples
///
/// ```
/// use depender::distance::pairwise_distances;
/// use depender::primitives::Matrix;
///
/// let x = Matrix::from_vec(3, 1, vec![0.0, 3.0, 7.0]).expect("valid shape");
/// let d = pairwise_distances(&x).expect("non-empty samples");
/// assert_eq!(d.get(0, 1), 3.0);
/// assert_eq!(d.get(0, 2), 7.0);
/// assert_eq!(d.get(2, 1), 4.0);
/// ```
pub fn pairwise_distances(data: &Matrix<f32>) -> Result<Matrix<f32>> {
    let n = data.n_rows();
    let d = data.n_cols();

    if n == 0 || d == 0 {
        return Err(DependerError::empty_input("sample matrix"));
    }

    let mut dist = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..i {
            let mut sq_sum = 0.0_f32;
            for k in 0..d {
                let diff = data.get(i, k) - data.get(j, k);
                sq_sum += diff * diff;
            }
            let dij = sq_sum.sqrt();
            dist.set(i, j, dij);
            dist.set(j, i, dij);
        }
    }
    Ok(dist)
}

/// Applies a centering scheme to a square pairwise distance matrix.
///
/// # Errors
///
/// Returns an error if the matrix is not square, has fewer than 2 rows,
/// or has fewer than 4 rows for the unbiased scheme (whose normalization
/// divides by `n - 2` and `n - 1`).
pub fn center_distance_matrix(dist: &Matrix<f32>, scheme: CenteringScheme) -> Result<Matrix<f32>> {
    let (n, m) = dist.shape();
    if n != m {
        return Err(DependerError::DimensionMismatch {
            expected: format!("square matrix ({n} x {n})"),
            actual: format!("{n} x {m}"),
        });
    }
    if n < 2 {
        return Err(DependerError::invalid_parameter(
            "num_samples",
            n,
            ">= 2 for centering",
        ));
    }

    match scheme {
        CenteringScheme::Biased => Ok(center_biased(dist, n)),
        CenteringScheme::Unbiased => {
            if n < 4 {
                return Err(DependerError::invalid_parameter(
                    "num_samples",
                    n,
                    ">= 4 for unbiased centering",
                ));
            }
            Ok(center_unbiased(dist, n))
        }
        CenteringScheme::Mantel => Ok(center_mantel(dist, n)),
    }
}

fn row_sums(dist: &Matrix<f32>, n: usize) -> Vec<f32> {
    let mut sums = vec![0.0_f32; n];
    for i in 0..n {
        let mut s = 0.0;
        for j in 0..n {
            s += dist.get(i, j);
        }
        sums[i] = s;
    }
    sums
}

fn center_biased(dist: &Matrix<f32>, n: usize) -> Matrix<f32> {
    // Distance matrices are symmetric, so row sums double as column sums.
    let sums = row_sums(dist, n);
    let grand_mean = sums.iter().sum::<f32>() / (n * n) as f32;
    let nf = n as f32;

    let mut centered = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let value = dist.get(i, j) - sums[i] / nf - sums[j] / nf + grand_mean;
            centered.set(i, j, value);
        }
    }
    centered
}

fn center_unbiased(dist: &Matrix<f32>, n: usize) -> Matrix<f32> {
    let sums = row_sums(dist, n);
    let total: f32 = sums.iter().sum();
    let nf = n as f32;

    let mut centered = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let value = dist.get(i, j) - sums[i] / (nf - 2.0) - sums[j] / (nf - 2.0)
                + total / ((nf - 1.0) * (nf - 2.0));
            centered.set(i, j, value);
        }
    }
    centered
}

fn center_mantel(dist: &Matrix<f32>, n: usize) -> Matrix<f32> {
    let total: f32 = row_sums(dist, n).iter().sum();
    // Diagonal of a distance matrix is zero, so the total is the off-diagonal sum.
    let off_diag_mean = total / (n * (n - 1)) as f32;

    let mut centered = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            centered.set(i, j, dist.get(i, j) - off_diag_mean);
        }
    }
    centered
}

#[cfg(test)]
#[path = "distance_tests.rs"]
mod tests;
