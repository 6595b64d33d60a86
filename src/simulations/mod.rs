//! Synthetic paired-sample generators with known dependency structure.
//!
//! Each simulation draws `(x, y)` pairs where the relationship between
//! `x` and `y` is known by construction, so an independence test's
//! empirical rejection rate against it is a ground-truth power estimate.
//!
//! Multivariate inputs follow the usual benchmark convention: the
//! response depends on the weighted projection `x . w` with decaying
//! weights `w_i = 1/i`, and the noise term is only active for univariate
//! `x` (the multivariate settings isolate the geometric structure).
//!
//! # Families
//!
//! - [`functional`]: noisy function relationships (linear, quadratic,
//!   cubic, step, exponential, logarithmic, sine)
//! - [`shapes`]: geometric supports (w-shape, spiral, circle/ellipse,
//!   square/diamond)
//! - [`noise`]: joint distributions and null structures (joint normal,
//!   multiplicative noise, multimodal independence, uncorrelated
//!   Bernoulli)
//!
//! # Example
//!
//! ```
//! use depender::simulations::{LinearSim, Simulation};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let (x, y) = LinearSim::default().sample(50, 2, &mut rng).expect("valid parameters");
//! assert_eq!(x.shape(), (50, 2));
//! assert_eq!(y.shape(), (50, 1));
//! ```

pub mod functional;
pub mod noise;
pub mod shapes;

pub use functional::{
    CubicSim, ExponentialSim, LinearSim, LogarithmicSim, QuadraticSim, SineSim, StepSim,
};
pub use noise::{
    JointNormalSim, MultimodalIndependenceSim, MultiplicativeNoiseSim, UncorrelatedBernoulliSim,
};
pub use shapes::{CircleSim, SpiralSim, SquareSim, WShapedSim};

use crate::error::{DependerError, Result};
use crate::primitives::{Matrix, Vector};
use rand::rngs::StdRng;
use rand::Rng;

/// A parametrized generator of paired samples.
pub trait Simulation {
    /// Short name of the simulation (e.g. "linear", "w_shaped").
    fn name(&self) -> &'static str;

    /// Draws `num_samples` paired observations with `num_dimensions`
    /// input dimensions.
    ///
    /// Returns `(x, y)` where `x` is `n x d` and `y` is `n x q` for a
    /// simulation-specific `q` (1 for projection-based simulations, `d`
    /// for elementwise ones).
    ///
    /// # Errors
    ///
    /// Returns an error if `num_samples` or `num_dimensions` is zero.
    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)>;
}

/// Rejects empty sample shapes.
pub(crate) fn validate_shape(num_samples: usize, num_dimensions: usize) -> Result<()> {
    if num_samples == 0 {
        return Err(DependerError::invalid_parameter(
            "num_samples",
            num_samples,
            "> 0",
        ));
    }
    if num_dimensions == 0 {
        return Err(DependerError::invalid_parameter(
            "num_dimensions",
            num_dimensions,
            "> 0",
        ));
    }
    Ok(())
}

/// Decaying projection weights `[1, 1/2, ..., 1/d]`.
pub(crate) fn decaying_coeffs(num_dimensions: usize) -> Vector<f32> {
    Vector::from_vec(
        (0..num_dimensions)
            .map(|i| 1.0 / (i as f32 + 1.0))
            .collect(),
    )
}

/// Noise gate: multivariate inputs suppress the additive noise term.
pub(crate) fn kappa(num_dimensions: usize) -> f32 {
    if num_dimensions == 1 {
        1.0
    } else {
        0.0
    }
}

/// Samples a standard normal via the Box-Muller transform.
pub(crate) fn randn(rng: &mut impl Rng) -> f32 {
    let u1: f32 = rng.gen::<f32>().max(1e-10);
    let u2: f32 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}

/// An `n x d` matrix of uniform draws from `[low, high)`.
pub(crate) fn uniform_matrix(
    rng: &mut StdRng,
    num_samples: usize,
    num_dimensions: usize,
    low: f32,
    high: f32,
) -> Matrix<f32> {
    let mut data = Matrix::zeros(num_samples, num_dimensions);
    for i in 0..num_samples {
        for j in 0..num_dimensions {
            data.set(i, j, rng.gen_range(low..high));
        }
    }
    data
}

/// An `n x d` matrix of independent standard normal draws.
pub(crate) fn standard_normal_matrix(
    rng: &mut StdRng,
    num_samples: usize,
    num_dimensions: usize,
) -> Matrix<f32> {
    let mut data = Matrix::zeros(num_samples, num_dimensions);
    for i in 0..num_samples {
        for j in 0..num_dimensions {
            data.set(i, j, randn(rng));
        }
    }
    data
}

/// Weighted projection `x . w` of each row onto the decaying coefficients.
pub(crate) fn project(x: &Matrix<f32>, coeffs: &Vector<f32>) -> Result<Vector<f32>> {
    Ok(x.matvec(coeffs)?)
}

/// Wraps a response vector as an `n x 1` matrix.
pub(crate) fn as_column(values: Vec<f32>) -> Result<Matrix<f32>> {
    let n = values.len();
    Ok(Matrix::from_vec(n, 1, values)?)
}

#[cfg(test)]
#[path = "simulations_tests.rs"]
mod tests;
