use super::*;
use crate::simulations::{LinearSim, MultimodalIndependenceSim, Simulation};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn line(n: usize, slope: f32) -> (Matrix<f32>, Matrix<f32>) {
    let xs: Vec<f32> = (0..n).map(|i| i as f32).collect();
    let ys: Vec<f32> = xs.iter().map(|&v| slope * v + 1.0).collect();
    let x = Matrix::from_vec(n, 1, xs).expect("valid shape");
    let y = Matrix::from_vec(n, 1, ys).expect("valid shape");
    (x, y)
}

#[test]
fn test_pearson_perfect_positive() {
    let (x, y) = line(10, 2.0);
    let r = RVCorr::pearson().statistic(&x, &y).expect("valid samples");
    assert!((r - 1.0).abs() < 1e-5);
}

#[test]
fn test_pearson_perfect_negative() {
    let (x, y) = line(10, -3.0);
    let r = RVCorr::pearson().statistic(&x, &y).expect("valid samples");
    assert!((r + 1.0).abs() < 1e-5);
}

#[test]
fn test_pearson_constant_input_gives_zero() {
    let x = Matrix::from_vec(5, 1, vec![2.0; 5]).expect("valid shape");
    let y = Matrix::from_vec(5, 1, vec![1.0, 2.0, 3.0, 4.0, 5.0]).expect("valid shape");
    let r = RVCorr::pearson().statistic(&x, &y).expect("valid samples");
    assert_eq!(r, 0.0);
}

#[test]
fn test_pearson_rejects_multivariate_input() {
    let x = Matrix::zeros(5, 2);
    let y = Matrix::zeros(5, 1);
    let result = RVCorr::pearson().statistic(&x, &y);
    assert!(matches!(result, Err(DependerError::InvalidParameter { .. })));
}

#[test]
fn test_rv_univariate_equals_r_squared() {
    let mut rng = StdRng::seed_from_u64(2);
    let (x, y) = LinearSim::default()
        .with_noise(1.0)
        .sample(40, 1, &mut rng)
        .expect("valid simulation parameters");
    let r = RVCorr::pearson().statistic(&x, &y).expect("valid samples");
    let rv = RVCorr::rv().statistic(&x, &y).expect("valid samples");
    assert!(
        (rv - r * r).abs() < 1e-4,
        "rv = {rv} should equal r^2 = {}",
        r * r
    );
}

#[test]
fn test_cca_univariate_equals_abs_r() {
    let (x, y) = line(12, -2.0);
    let rho = RVCorr::cca().statistic(&x, &y).expect("valid samples");
    assert!((rho - 1.0).abs() < 1e-3, "expected |r| = 1, got {rho}");
}

#[test]
fn test_rv_and_cca_bounded() {
    let mut rng = StdRng::seed_from_u64(9);
    let (x, y) = MultimodalIndependenceSim::default()
        .sample(50, 3, &mut rng)
        .expect("valid simulation parameters");
    let rv = RVCorr::rv().statistic(&x, &y).expect("valid samples");
    let rho = RVCorr::cca().statistic(&x, &y).expect("valid samples");
    assert!((0.0..=1.0).contains(&rv), "rv out of range: {rv}");
    assert!((0.0..=1.0).contains(&rho), "cca out of range: {rho}");
}

#[test]
fn test_rv_multivariate_dependence() {
    // y shares columns with x, so the RV coefficient should be large
    let mut rng = StdRng::seed_from_u64(4);
    let (x, _) = MultimodalIndependenceSim::default()
        .sample(30, 2, &mut rng)
        .expect("valid simulation parameters");
    let rv = RVCorr::rv().statistic(&x, &x).expect("valid samples");
    assert!(rv > 0.99, "self-comparison should give rv near 1, got {rv}");
}

#[test]
fn test_rv_near_zero_under_independence() {
    let mut rng = StdRng::seed_from_u64(6);
    let (x, y) = MultimodalIndependenceSim::default()
        .sample(200, 1, &mut rng)
        .expect("valid simulation parameters");
    let rv = RVCorr::rv().statistic(&x, &y).expect("valid samples");
    assert!(rv < 0.1, "independent data should give rv near 0, got {rv}");
}

#[test]
fn test_row_count_mismatch_rejected() {
    let x = Matrix::zeros(4, 1);
    let y = Matrix::zeros(5, 1);
    assert!(RVCorr::rv().statistic(&x, &y).is_err());
}

#[test]
fn test_variant_names() {
    assert_eq!(RVCorr::pearson().name(), "pearson");
    assert_eq!(RVCorr::rv().name(), "rv");
    assert_eq!(RVCorr::cca().name(), "cca");
    assert_eq!(RVCorr::default().variant(), RVVariant::Rv);
}
