//! Geometric supports: dependency through the shape of the joint sample.

use super::{
    as_column, decaying_coeffs, kappa, project, randn, standard_normal_matrix, uniform_matrix,
    validate_shape, Simulation,
};
use crate::error::Result;
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// W-shaped relationship: `y = 4 [((x . w)^2 - 1/2)^2 + (u . w)/500] + kappa * noise * eps`
/// with `u` uniform on `[0, 1)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WShapedSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for WShapedSim {
    fn default() -> Self {
        Self { noise: 0.5 }
    }
}

impl WShapedSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for WShapedSim {
    fn name(&self) -> &'static str {
        "w_shaped"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let coeffs = decaying_coeffs(num_dimensions);
        let x = uniform_matrix(rng, num_samples, num_dimensions, -1.0, 1.0);
        let u = uniform_matrix(rng, num_samples, num_dimensions, 0.0, 1.0);
        let xw = project(&x, &coeffs)?;
        let uw = project(&u, &coeffs)?;
        let k = kappa(num_dimensions);

        let y: Vec<f32> = (0..num_samples)
            .map(|i| {
                let bend = xw[i] * xw[i] - 0.5;
                4.0 * (bend * bend + uw[i] / 500.0) + k * self.noise * randn(rng)
            })
            .collect();
        Ok((x, as_column(y)?))
    }
}

/// Spiral relationship: radius `r` uniform on `[0, 5)`, `x` on the spiral
/// arm in spherical coordinates, `y = r sin(pi r) + 0.4 d * noise * eps`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpiralSim {
    /// Noise amplitude
    pub noise: f32,
}

impl Default for SpiralSim {
    fn default() -> Self {
        Self { noise: 1.0 }
    }
}

impl SpiralSim {
    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }
}

impl Simulation for SpiralSim {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let d = num_dimensions;
        let mut x = Matrix::zeros(num_samples, d);
        let mut y = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let r: f32 = rng.gen_range(0.0..5.0);
            let angle = PI * r;

            // Spherical spiral coordinates: successive sine factors peel
            // off one axis at a time, the last axis keeps the cosine.
            let mut coord = vec![0.0_f32; d];
            coord[0] = angle.cos();
            for j in 0..d - 1 {
                coord[j + 1] = coord[j] * angle.cos();
                coord[j] *= angle.sin();
            }
            for j in 0..d {
                x.set(i, j, r * coord[j]);
            }

            y.push(r * angle.sin() + 0.4 * d as f32 * self.noise * randn(rng));
        }

        Ok((x, as_column(y)?))
    }
}

/// Points on a circle (or ellipse): angle `pi z` with `z` uniform on
/// `[-1, 1)`, `x = radius * (cos + 0.045 * noise * eps)`, `y = sin` of
/// the first angle. The jitter scales with the arm so circles and
/// ellipses blur proportionally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleSim {
    /// Horizontal radius; 1 gives a circle, larger values an ellipse
    pub radius: f32,
    /// Noise amplitude
    pub noise: f32,
}

impl Default for CircleSim {
    fn default() -> Self {
        Self {
            radius: 1.0,
            noise: 1.0,
        }
    }
}

impl CircleSim {
    /// Sets the horizontal radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    /// The standard ellipse configuration (horizontal radius 5).
    #[must_use]
    pub fn ellipse() -> Self {
        Self::default().with_radius(5.0)
    }
}

impl Simulation for CircleSim {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let d = num_dimensions;
        let z = uniform_matrix(rng, num_samples, d, -1.0, 1.0);
        let eps = standard_normal_matrix(rng, num_samples, d);

        let mut x = Matrix::zeros(num_samples, d);
        let mut y = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let mut coord = vec![0.0_f32; d];
            coord[0] = (PI * z.get(i, 0)).cos();
            for j in 0..d - 1 {
                let angle = PI * z.get(i, j + 1);
                coord[j + 1] = coord[j] * angle.cos();
                coord[j] *= angle.sin();
            }
            for j in 0..d {
                let value = self.radius * (coord[j] + 0.045 * self.noise * eps.get(i, j));
                x.set(i, j, value);
            }

            y.push((PI * z.get(i, 0)).sin());
        }

        Ok((x, as_column(y)?))
    }
}

/// Uniform fill of a rotated square: `(u, v)` uniform on `[-1, 1)^2`
/// rotated by `rotation`, with a small jitter on `x`.
///
/// The default rotation `-pi/8` keeps a tilted square; `-pi/4` turns it
/// into a diamond.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SquareSim {
    /// Rotation angle in radians
    pub rotation: f32,
    /// Noise amplitude
    pub noise: f32,
}

impl Default for SquareSim {
    fn default() -> Self {
        Self {
            rotation: -PI / 8.0,
            noise: 1.0,
        }
    }
}

impl SquareSim {
    /// Sets the rotation angle.
    #[must_use]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the noise amplitude.
    #[must_use]
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    /// The diamond configuration (rotation `-pi/4`).
    #[must_use]
    pub fn diamond() -> Self {
        Self::default().with_rotation(-PI / 4.0)
    }
}

impl Simulation for SquareSim {
    fn name(&self) -> &'static str {
        "square"
    }

    fn sample(
        &self,
        num_samples: usize,
        num_dimensions: usize,
        rng: &mut StdRng,
    ) -> Result<(Matrix<f32>, Matrix<f32>)> {
        validate_shape(num_samples, num_dimensions)?;

        let d = num_dimensions;
        let u = uniform_matrix(rng, num_samples, d, -1.0, 1.0);
        let v = uniform_matrix(rng, num_samples, d, -1.0, 1.0);
        let eps = standard_normal_matrix(rng, num_samples, d);

        let (sin_t, cos_t) = self.rotation.sin_cos();
        let mut x = Matrix::zeros(num_samples, d);
        let mut y = Matrix::zeros(num_samples, d);
        for i in 0..num_samples {
            for j in 0..d {
                let uij = u.get(i, j);
                let vij = v.get(i, j);
                x.set(
                    i,
                    j,
                    uij * cos_t + vij * sin_t + 0.075 * self.noise * eps.get(i, j),
                );
                y.set(i, j, -uij * sin_t + vij * cos_t);
            }
        }

        Ok((x, y))
    }
}
