//! Noisy function relationships: `y = f(x . w) + noise`.

use super::{
    as_column, decaying_coeffs, kappa, project, randn, standard_normal_matrix, uniform_matrix,
    validate_shape, Simulation,
};
use crate::error::Result;
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Linear relationship: `y = x . w + kappa * noise * eps`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for LinearSim {
    fn default() -> Self {
        Self { noise: 1.0 }
    }
}

impl LinearSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for LinearSim {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let x = uniform_matrix(rng, num_samples, num_dimensions, -1.0, 1.0);
        let xw = project(&x, &decaying_coeffs(num_dimensions))?;
        let k = kappa(num_dimensions);

        let y: Vec<f32> = (0..num_samples)
            .map(|i| xw[i] + k * self.noise * randn(rng))
            .collect();
        Ok((x, as_column(y)?))
    }
}

/// Quadratic relationship: `y = (x . w)^2 + 0.5 * kappa * noise * eps`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuadraticSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for QuadraticSim {
    fn default() -> Self {
        Self { noise: 1.0 }
    }
}

impl QuadraticSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for QuadraticSim {
    fn name(&self) -> &'static str {
        "quadratic"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let x = uniform_matrix(rng, num_samples, num_dimensions, -1.0, 1.0);
        let xw = project(&x, &decaying_coeffs(num_dimensions))?;
        let k = kappa(num_dimensions);

        let y: Vec<f32> = (0..num_samples)
            .map(|i| xw[i] * xw[i] + 0.5 * k * self.noise * randn(rng))
            .collect();
        Ok((x, as_column(y)?))
    }
}

/// Cubic relationship around a shifted origin:
/// `y = 128 t^3 + 48 t^2 - 12 t + 80 * kappa * noise * eps`, `t = x . w - 1/3`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CubicSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for CubicSim {
    fn default() -> Self {
        Self { noise: 1.0 }
    }
}

impl CubicSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for CubicSim {
    fn name(&self) -> &'static str {
        "cubic"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let x = uniform_matrix(rng, num_samples, num_dimensions, -1.0, 1.0);
        let xw = project(&x, &decaying_coeffs(num_dimensions))?;
        let k = kappa(num_dimensions);

        let y: Vec<f32> = (0..num_samples)
            .map(|i| {
                let t = xw[i] - 1.0 / 3.0;
                128.0 * t * t * t + 48.0 * t * t - 12.0 * t + 80.0 * k * self.noise * randn(rng)
            })
            .collect();
        Ok((x, as_column(y)?))
    }
}

/// Step relationship: `y = 1[x . w > 0] + kappa * noise * eps`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StepSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for StepSim {
    fn default() -> Self {
        Self { noise: 1.0 }
    }
}

impl StepSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for StepSim {
    fn name(&self) -> &'static str {
        "step"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let x = uniform_matrix(rng, num_samples, num_dimensions, -1.0, 1.0);
        let xw = project(&x, &decaying_coeffs(num_dimensions))?;
        let k = kappa(num_dimensions);

        let y: Vec<f32> = (0..num_samples)
            .map(|i| {
                let indicator = if xw[i] > 0.0 { 1.0 } else { 0.0 };
                indicator + k * self.noise * randn(rng)
            })
            .collect();
        Ok((x, as_column(y)?))
    }
}

/// Exponential relationship: `y = exp(x . w) + 10 * kappa * noise * eps`
/// with `x` uniform on `[0, 3)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExponentialSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for ExponentialSim {
    fn default() -> Self {
        Self { noise: 1.0 }
    }
}

impl ExponentialSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for ExponentialSim {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let x = uniform_matrix(rng, num_samples, num_dimensions, 0.0, 3.0);
        let xw = project(&x, &decaying_coeffs(num_dimensions))?;
        let k = kappa(num_dimensions);

        let y: Vec<f32> = (0..num_samples)
            .map(|i| xw[i].exp() + 10.0 * k * self.noise * randn(rng))
            .collect();
        Ok((x, as_column(y)?))
    }
}

/// Logarithmic relationship: `y_ij = ln(x_ij^2) + 3 * kappa * noise * eps_i`
/// with standard normal `x`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogarithmicSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for LogarithmicSim {
    fn default() -> Self {
        Self { noise: 1.0 }
    }
}

impl LogarithmicSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for LogarithmicSim {
    fn name(&self) -> &'static str {
        "logarithmic"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let x = standard_normal_matrix(rng, num_samples, num_dimensions);
        let k = kappa(num_dimensions);

        let mut y = Matrix::zeros(num_samples, num_dimensions);
        for i in 0..num_samples {
            let eps = randn(rng);
            for j in 0..num_dimensions {
                let sq = (x.get(i, j) * x.get(i, j)).max(1e-12);
                y.set(i, j, sq.ln() + 3.0 * k * self.noise * eps);
            }
        }
        Ok((x, y))
    }
}

/// Sinusoidal relationship: `y_ij = sin(period * x_ij) + c * noise * eps_i`.
///
/// Low-frequency sine (period `4 pi`) keeps full noise weight; higher
/// frequencies halve it. The input gets a small jitter so the sine is
/// not sampled on an exact lattice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SineSim {
    /// Angular period of the sine
    pub period: f32,
    /// Noise amplitude
    pub noise: f32,
}

impl Default for SineSim {
    fn default() -> Self {
        Self {
            period: 4.0 * PI,
            noise: 1.0,
        }
    }
}

impl SineSim {
    /// Sets the angular period.
    #[must_use]
    pub fn with_period(mut self, period: f32) -> Self {
        self.period = period;
        self
    }

    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for SineSim {
    fn name(&self) -> &'static str {
        "sine"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let mut x = uniform_matrix(rng, num_samples, num_dimensions, -1.0, 1.0);
        if num_dimensions > 1 || self.noise > 0.0 {
            for i in 0..num_samples {
                for j in 0..num_dimensions {
                    let jitter = 0.02 * num_dimensions as f32 * randn(rng);
                    x.set(i, j, x.get(i, j) + jitter);
                }
            }
        }

        let noise_weight = if self.period <= 4.0 * PI { 1.0 } else { 0.5 };

        let mut y = Matrix::zeros(num_samples, num_dimensions);
        for i in 0..num_samples {
            let eps = randn(rng);
            for j in 0..num_dimensions {
                let value = (self.period * x.get(i, j)).sin() + noise_weight * self.noise * eps;
                y.set(i, j, value);
            }
        }
        Ok((x, y))
    }
}
