//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use depender::prelude::*;
//! ```

pub use crate::distance::{center_distance_matrix, pairwise_distances, CenteringScheme};
pub use crate::independence::{
    DCorr, DCorrVariant, IndependenceTest, PermutationConfig, RVCorr, RVVariant, TestResult,
};
pub use crate::power::{power, PowerConfig};
pub use crate::primitives::{Matrix, Vector};
pub use crate::simulations::{
    CircleSim, CubicSim, ExponentialSim, JointNormalSim, LinearSim, LogarithmicSim,
    MultimodalIndependenceSim, MultiplicativeNoiseSim, QuadraticSim, Simulation, SineSim,
    SpiralSim, SquareSim, StepSim, UncorrelatedBernoulliSim, WShapedSim,
};
