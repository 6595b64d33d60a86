use super::*;
use crate::independence::{DCorr, RVCorr};
use crate::simulations::{LinearSim, MultimodalIndependenceSim};

fn quick_config(seed: u64) -> PowerConfig {
    PowerConfig::default()
        .with_num_samples(50)
        .with_repeats(200)
        .with_random_state(seed)
}

#[test]
fn test_power_high_for_detectable_dependence() {
    let estimate = power(
        &DCorr::biased(),
        &LinearSim::default().with_noise(0.5),
        &quick_config(1),
    )
    .expect("valid configuration");
    assert!(
        estimate > 0.8,
        "linear dependence at low noise should be detected, got {estimate}"
    );
}

#[test]
fn test_power_near_alpha_under_independence() {
    let estimate = power(
        &DCorr::unbiased(),
        &MultimodalIndependenceSim,
        &quick_config(2),
    )
    .expect("valid configuration");
    assert!(
        estimate < 0.2,
        "independent data should reject near the alpha level, got {estimate}"
    );
}

#[test]
fn test_power_is_a_proportion() {
    let estimate = power(&RVCorr::pearson(), &LinearSim::default(), &quick_config(3))
        .expect("valid configuration");
    assert!((0.0..=1.0).contains(&estimate));
}

#[test]
fn test_power_deterministic_with_seed() {
    let a = power(&DCorr::mantel(), &LinearSim::default(), &quick_config(4))
        .expect("valid configuration");
    let b = power(&DCorr::mantel(), &LinearSim::default(), &quick_config(4))
        .expect("valid configuration");
    assert_eq!(a, b);
}

#[test]
fn test_power_varies_with_seed_but_stays_stable() {
    let a = power(&DCorr::biased(), &LinearSim::default(), &quick_config(5))
        .expect("valid configuration");
    let b = power(&DCorr::biased(), &LinearSim::default(), &quick_config(6))
        .expect("valid configuration");
    assert!(
        (a - b).abs() < 0.15,
        "estimates across seeds should agree within sampling error: {a} vs {b}"
    );
}

#[test]
fn test_config_validation() {
    let base = PowerConfig::default();

    let too_few_samples = base.clone().with_num_samples(2);
    assert!(power(&DCorr::biased(), &LinearSim::default(), &too_few_samples).is_err());

    let zero_repeats = base.clone().with_repeats(0);
    assert!(power(&DCorr::biased(), &LinearSim::default(), &zero_repeats).is_err());

    let bad_alpha = base.clone().with_alpha(1.5);
    assert!(power(&DCorr::biased(), &LinearSim::default(), &bad_alpha).is_err());

    let zero_dims = base.with_num_dimensions(0);
    assert!(power(&DCorr::biased(), &LinearSim::default(), &zero_dims).is_err());
}

#[test]
fn test_config_defaults() {
    let config = PowerConfig::default();
    assert_eq!(config.num_samples, 100);
    assert_eq!(config.num_dimensions, 1);
    assert_eq!(config.repeats, 1000);
    assert!((config.alpha - 0.05).abs() < 1e-6);
    assert!(config.random_state.is_none());
}

#[test]
fn test_config_serde_round_trip() {
    let config = quick_config(9).with_alpha(0.01);
    let json = serde_json::to_string(&config).expect("serialize");
    let back: PowerConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.num_samples, config.num_samples);
    assert_eq!(back.repeats, config.repeats);
    assert_eq!(back.random_state, config.random_state);
}
