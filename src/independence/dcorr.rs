//! Distance-correlation family of independence statistics.
//!
//! All three variants share one recipe: compute Euclidean distance matrices
//! for `x` and `y`, apply a centering transform, and normalize the inner
//! product of the centered matrices:
//!
//! ```text
//! stat = <A, B> / sqrt(<A, A> <B, B>)
//! ```
//!
//! The centering scheme is what separates the variants:
//!
//! - **biased** ("dcorr"): classic double centering
//! - **unbiased** ("mcorr"): U-centering, which removes the O(1/n) bias
//!   and admits a Student-t null approximation
//! - **mantel**: off-diagonal demeaning
//!
//! # References
//!
//! - Székely, Rizzo & Bakirov (2007): "Measuring and testing dependence
//!   by correlation of distances"
//! - Székely & Rizzo (2013): "The distance correlation t-test of independence"
//! - Mantel (1967): "The detection of disease clustering and a generalized
//!   regression approach"

use crate::distance::{center_distance_matrix, pairwise_distances, CenteringScheme};
use crate::error::{DependerError, Result};
use crate::independence::{validate_paired_samples, IndependenceTest, TestResult};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Variant of the distance-correlation statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DCorrVariant {
    /// Classic (biased) distance correlation.
    Biased,
    /// Unbiased distance correlation (U-centered).
    Unbiased,
    /// Mantel statistic.
    Mantel,
}

impl DCorrVariant {
    fn centering(self) -> CenteringScheme {
        match self {
            DCorrVariant::Biased => CenteringScheme::Biased,
            DCorrVariant::Unbiased => CenteringScheme::Unbiased,
            DCorrVariant::Mantel => CenteringScheme::Mantel,
        }
    }
}

/// Distance-correlation independence test.
///
/// # Examples
///
/// ```
/// use depender::independence::{DCorr, DCorrVariant, IndependenceTest};
/// use depender::primitives::Matrix;
///
/// let x = Matrix::from_vec(6, 1, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).expect("valid shape");
/// let y = Matrix::from_vec(6, 1, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]).expect("valid shape");
///
/// let mcorr = DCorr::new(DCorrVariant::Unbiased);
/// let stat = mcorr.statistic(&x, &y).expect("valid samples");
/// assert!(stat > 0.9); // strong dependence
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DCorr {
    variant: DCorrVariant,
}

impl Default for DCorr {
    fn default() -> Self {
        Self::new(DCorrVariant::Unbiased)
    }
}

impl DCorr {
    /// Creates a distance-correlation test with the given variant.
    #[must_use]
    pub fn new(variant: DCorrVariant) -> Self {
        Self { variant }
    }

    /// Classic (biased) distance correlation.
    #[must_use]
    pub fn biased() -> Self {
        Self::new(DCorrVariant::Biased)
    }

    /// Unbiased distance correlation.
    #[must_use]
    pub fn unbiased() -> Self {
        Self::new(DCorrVariant::Unbiased)
    }

    /// Mantel statistic.
    #[must_use]
    pub fn mantel() -> Self {
        Self::new(DCorrVariant::Mantel)
    }

    /// Returns the configured variant.
    #[must_use]
    pub fn variant(&self) -> DCorrVariant {
        self.variant
    }

    /// Student-t approximation of the p-value for the unbiased statistic.
    ///
    /// Under independence, `T = sqrt(v - 1) * r / sqrt(1 - r^2)` with
    /// `v = n(n-3)/2` is approximately t-distributed with `v - 1` degrees
    /// of freedom (Székely & Rizzo 2013). The returned p-value is the
    /// upper tail probability.
    ///
    /// # Errors
    ///
    /// Returns an error for variants other than `Unbiased` (the
    /// approximation is only valid for the U-centered statistic) or if
    /// the statistic itself fails.
    pub fn t_test(&self, x: &Matrix<f32>, y: &Matrix<f32>) -> Result<TestResult> {
        if self.variant != DCorrVariant::Unbiased {
            return Err(DependerError::invalid_parameter(
                "variant",
                format!("{:?}", self.variant),
                "Unbiased (t approximation only holds for the U-centered statistic)",
            ));
        }

        let r = self.statistic(x, y)?;
        let n = x.n_rows() as f32;
        let v = n * (n - 3.0) / 2.0;
        let df = v - 1.0;
        if df < 1.0 {
            return Err(DependerError::invalid_parameter(
                "num_samples",
                x.n_rows(),
                ">= 4 for the t approximation",
            ));
        }

        let r_clamped = r.clamp(-0.999_999, 0.999_999);
        let t = df.sqrt() * r_clamped / (1.0 - r_clamped * r_clamped).sqrt();
        let pvalue = student_t_sf(t, df);

        Ok(TestResult {
            statistic: r,
            pvalue,
        })
    }
}

impl IndependenceTest for DCorr {
    fn name(&self) -> &'static str {
        match self.variant {
            DCorrVariant::Biased => "dcorr",
            DCorrVariant::Unbiased => "mcorr",
            DCorrVariant::Mantel => "mantel",
        }
    }

    fn statistic(&self, x: &Matrix<f32>, y: &Matrix<f32>) -> Result<f32> {
        validate_paired_samples(x, y)?;

        let scheme = self.variant.centering();
        let a = center_distance_matrix(&pairwise_distances(x)?, scheme)?;
        let b = center_distance_matrix(&pairwise_distances(y)?, scheme)?;

        let n = a.n_rows();
        let mut covariance = 0.0_f32;
        let mut variance_x = 0.0_f32;
        let mut variance_y = 0.0_f32;
        for i in 0..n {
            for j in 0..n {
                let aij = a.get(i, j);
                let bij = b.get(i, j);
                covariance += aij * bij;
                variance_x += aij * aij;
                variance_y += bij * bij;
            }
        }

        // Degenerate samples (all points coincide) carry no evidence of
        // dependence; report zero rather than 0/0.
        let denom = variance_x * variance_y;
        if denom <= 0.0 {
            return Ok(0.0);
        }
        Ok(covariance / denom.sqrt())
    }
}

// ============================================================================
// Student-t tail probability
// ============================================================================

/// Upper tail probability P(T > t) for a t-distribution with `df` degrees
/// of freedom.
fn student_t_sf(t: f32, df: f32) -> f32 {
    // For large df the t-distribution is indistinguishable from standard
    // normal and the incomplete beta loses accuracy in f32.
    if df > 30.0 {
        return normal_sf(t);
    }

    let x = df / (df + t * t);
    let one_tail = 0.5 * incomplete_beta(df / 2.0, 0.5, x);
    if t >= 0.0 {
        one_tail.clamp(0.0, 1.0)
    } else {
        (1.0 - one_tail).clamp(0.0, 1.0)
    }
}

/// Standard normal upper tail probability.
fn normal_sf(x: f32) -> f32 {
    0.5 * (1.0 - erf(x / 2.0_f32.sqrt()))
}

/// Error function approximation (Abramowitz & Stegun 7.1.26, |err| < 1.5e-7).
fn erf(x: f32) -> f32 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736 + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Regularized incomplete beta function I_x(a, b).
fn incomplete_beta(a: f32, b: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let bt = (x.powf(a) * (1.0 - x).powf(b)) / (a * beta_function(a, b));

    if x < (a + 1.0) / (a + b + 2.0) {
        bt * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - bt * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Beta function B(a, b) = Γ(a)Γ(b)/Γ(a+b).
fn beta_function(a: f32, b: f32) -> f32 {
    gamma(a) * gamma(b) / gamma(a + b)
}

/// Continued fraction for incomplete beta (Lentz's algorithm).
fn beta_continued_fraction(a: f32, b: f32, x: f32) -> f32 {
    let max_iter = 100;
    let eps = 1e-7;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < 1e-30 {
        d = 1e-30;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=max_iter {
        let m_f = m as f32;
        let m2 = 2.0 * m_f;

        // Even step
        let aa = m_f * (b - m_f) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < 1e-30 {
            d = 1e-30;
        }
        c = 1.0 + aa / c;
        if c.abs() < 1e-30 {
            c = 1e-30;
        }
        d = 1.0 / d;
        h *= d * c;

        // Odd step
        let aa = -(a + m_f) * (qab + m_f) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < 1e-30 {
            d = 1e-30;
        }
        c = 1.0 + aa / c;
        if c.abs() < 1e-30 {
            c = 1e-30;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;

        if (del - 1.0).abs() < eps {
            break;
        }
    }

    h
}

/// Gamma function approximation (Stirling's approximation).
fn gamma(z: f32) -> f32 {
    if z < 0.5 {
        // Reflection formula: Γ(z) = π / (sin(πz) * Γ(1-z))
        PI / ((PI * z).sin() * gamma(1.0 - z))
    } else {
        // Stirling's approximation
        let z = z - 1.0;
        let tmp = z + 5.5;
        let tmp = (z + 0.5) * tmp.ln() - tmp;
        let ser = 1.0 + 76.180_09_f32 / (z + 1.0) - 86.505_32_f32 / (z + 2.0)
            + 24.014_1_f32 / (z + 3.0)
            - 1.231_739_5_f32 / (z + 4.0)
            + 0.001_208_58_f32 / (z + 5.0)
            - 0.000_005_363_82_f32 / (z + 6.0);
        (tmp + ser.ln()).exp() * (2.0 * PI).sqrt()
    }
}

#[cfg(test)]
#[path = "dcorr_tests.rs"]
mod tests;
