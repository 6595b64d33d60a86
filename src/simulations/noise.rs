//! Joint distributions and null structures.

use super::{
    as_column, decaying_coeffs, kappa, project, randn, standard_normal_matrix, validate_shape,
    Simulation,
};
use crate::error::Result;
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Jointly normal `(x, y)` with cross-covariance `rho = 1/(2d)` between
/// every `x` and `y` coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JointNormalSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for JointNormalSim {
    fn default() -> Self {
        Self { noise: 0.5 }
    }
}

impl JointNormalSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for JointNormalSim {
    fn name(&self) -> &'static str {
        "joint_normal"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let d = num_dimensions;
        let rho = 1.0 / (2.0 * d as f32);

        // Block covariance [[I, rho J], [rho J, I]] over the stacked
        // (x, y) coordinates; J is the all-ones block.
        let mut cov = Matrix::zeros(2 * d, 2 * d);
        for i in 0..2 * d {
            cov.set(i, i, 1.0);
        }
        for i in 0..d {
            for j in 0..d {
                cov.set(i, d + j, rho);
                cov.set(d + j, i, rho);
            }
        }

        let chol = cov.cholesky_factor()?;
        let k = kappa(d);

        let mut x = Matrix::zeros(num_samples, d);
        let mut y = Matrix::zeros(num_samples, d);
        for i in 0..num_samples {
            let z: Vec<f32> = (0..2 * d).map(|_| randn(rng)).collect();
            for row in 0..2 * d {
                let mut value = 0.0;
                for col in 0..=row {
                    value += chol.get(row, col) * z[col];
                }
                if row < d {
                    x.set(i, row, value);
                } else {
                    y.set(i, row - d, value + k * self.noise * randn(rng));
                }
            }
        }

        Ok((x, y))
    }
}

/// Multiplicative noise: `y = x * eps` elementwise, both factors standard
/// normal. The product is uncorrelated with `x` but strongly dependent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MultiplicativeNoiseSim;

impl Simulation for MultiplicativeNoiseSim {
    fn name(&self) -> &'static str {
        "multiplicative_noise"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let x = standard_normal_matrix(rng, num_samples, num_dimensions);
        let eps = standard_normal_matrix(rng, num_samples, num_dimensions);

        let mut y = Matrix::zeros(num_samples, num_dimensions);
        for i in 0..num_samples {
            for j in 0..num_dimensions {
                y.set(i, j, x.get(i, j) * eps.get(i, j));
            }
        }
        Ok((x, y))
    }
}

/// Multimodal independence: both marginals are bimodal mixtures
/// `u/3 + 2b - 1` with `u` standard normal and `b` Bernoulli(1/2);
/// `x` and `y` are drawn independently.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MultimodalIndependenceSim;

impl Simulation for MultimodalIndependenceSim {
    fn name(&self) -> &'static str {
        "multimodal_independence"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        fn bimodal(num_samples: usize, num_dimensions: usize, rng: &mut StdRng) -> Matrix<f32> {
            let mut m = Matrix::zeros(num_samples, num_dimensions);
            for i in 0..num_samples {
                for j in 0..num_dimensions {
                    let mode = if rng.gen_bool(0.5) { 1.0 } else { 0.0 };
                    m.set(i, j, randn(rng) / 3.0 + 2.0 * mode - 1.0);
                }
            }
            m
        }

        let x = bimodal(num_samples, num_dimensions, rng);
        let y = bimodal(num_samples, num_dimensions, rng);
        Ok((x, y))
    }
}

/// Uncorrelated Bernoulli: a hidden fair coin flips the sign of the
/// projection, so `y` is strongly dependent on `x` yet linearly
/// uncorrelated with it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UncorrelatedBernoulliSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for UncorrelatedBernoulliSim {
    fn default() -> Self {
        Self { noise: 0.5 }
    }
}

impl UncorrelatedBernoulliSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for UncorrelatedBernoulliSim {
    fn name(&self) -> &'static str {
        "uncorrelated_bernoulli"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let d = num_dimensions;
        let coeffs = decaying_coeffs(d);

        // The response is built from the clean coin flips; only the
        // observed x carries measurement noise.
        let mut bits = Matrix::zeros(num_samples, d);
        let mut x = Matrix::zeros(num_samples, d);
        for i in 0..num_samples {
            for j in 0..d {
                let bit = if rng.gen_bool(0.5) { 1.0 } else { 0.0 };
                bits.set(i, j, bit);
                x.set(i, j, bit + self.noise * randn(rng));
            }
        }

        let bw = project(&bits, &coeffs)?;
        let y: Vec<f32> = (0..num_samples)
            .map(|i| {
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                sign * bw[i] + self.noise * randn(rng)
            })
            .collect();

        Ok((x, as_column(y)?))
    }
}
