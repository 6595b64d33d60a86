use super::*;

fn example_distances() -> Matrix<f32> {
    let x = Matrix::from_vec(4, 1, vec![0.0, 1.0, 3.0, 6.0]).expect("valid shape");
    pairwise_distances(&x).expect("non-empty samples")
}

#[test]
fn test_pairwise_distances_1d() {
    let d = example_distances();
    assert_eq!(d.get(0, 0), 0.0);
    assert_eq!(d.get(0, 1), 1.0);
    assert_eq!(d.get(0, 3), 6.0);
    assert_eq!(d.get(1, 2), 2.0);
    assert_eq!(d.get(3, 2), 3.0);
}

#[test]
fn test_pairwise_distances_euclidean_2d() {
    let x = Matrix::from_vec(2, 2, vec![0.0, 0.0, 3.0, 4.0]).expect("valid shape");
    let d = pairwise_distances(&x).expect("non-empty samples");
    assert!((d.get(0, 1) - 5.0).abs() < 1e-6);
}

#[test]
fn test_pairwise_distances_symmetric() {
    let d = example_distances();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(d.get(i, j), d.get(j, i));
        }
    }
}

#[test]
fn test_pairwise_distances_empty() {
    let x = Matrix::zeros(0, 0);
    assert!(pairwise_distances(&x).is_err());
}

#[test]
fn test_biased_centering_zero_row_col_means() {
    let d = example_distances();
    let a = center_distance_matrix(&d, CenteringScheme::Biased).expect("n >= 2");
    // Double centering annihilates row and column means
    for i in 0..4 {
        let row_mean: f32 = (0..4).map(|j| a.get(i, j)).sum::<f32>() / 4.0;
        let col_mean: f32 = (0..4).map(|j| a.get(j, i)).sum::<f32>() / 4.0;
        assert!(row_mean.abs() < 1e-5, "row {i} mean {row_mean}");
        assert!(col_mean.abs() < 1e-5, "col {i} mean {col_mean}");
    }
}

#[test]
fn test_unbiased_centering_zero_diagonal() {
    let d = example_distances();
    let a = center_distance_matrix(&d, CenteringScheme::Unbiased).expect("n >= 4");
    for i in 0..4 {
        assert_eq!(a.get(i, i), 0.0);
    }
}

#[test]
fn test_unbiased_centering_zero_off_diagonal_sums() {
    // U-centering makes every off-diagonal row sum vanish
    let d = example_distances();
    let a = center_distance_matrix(&d, CenteringScheme::Unbiased).expect("n >= 4");
    for i in 0..4 {
        let row_sum: f32 = (0..4).filter(|&j| j != i).map(|j| a.get(i, j)).sum();
        assert!(row_sum.abs() < 1e-4, "row {i} sum {row_sum}");
    }
}

#[test]
fn test_mantel_centering_off_diagonal_mean_zero() {
    let d = example_distances();
    let a = center_distance_matrix(&d, CenteringScheme::Mantel).expect("n >= 2");
    let mut sum = 0.0;
    for i in 0..4 {
        assert_eq!(a.get(i, i), 0.0);
        for j in 0..4 {
            if i != j {
                sum += a.get(i, j);
            }
        }
    }
    assert!(sum.abs() < 1e-4);
}

#[test]
fn test_unbiased_rejects_small_n() {
    let x = Matrix::from_vec(3, 1, vec![0.0, 1.0, 2.0]).expect("valid shape");
    let d = pairwise_distances(&x).expect("non-empty samples");
    let result = center_distance_matrix(&d, CenteringScheme::Unbiased);
    assert!(result.is_err());
    // Biased centering still works at n = 3
    assert!(center_distance_matrix(&d, CenteringScheme::Biased).is_ok());
}

#[test]
fn test_centering_rejects_non_square() {
    let d = Matrix::zeros(3, 4);
    let result = center_distance_matrix(&d, CenteringScheme::Biased);
    assert!(matches!(
        result,
        Err(DependerError::DimensionMismatch { .. })
    ));
}
