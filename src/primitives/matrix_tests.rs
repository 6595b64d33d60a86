use super::*;

#[test]
fn test_from_vec_valid() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid shape");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
}

#[test]
fn test_from_vec_wrong_length() {
    let result = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_get_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(0, 1, 5.0);
    assert_eq!(m.get(0, 1), 5.0);
    assert_eq!(m.get(1, 0), 0.0);
}

#[test]
fn test_row_and_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid shape");
    assert_eq!(m.row(1).as_slice(), &[4.0, 5.0, 6.0]);
    assert_eq!(m.column(2).as_slice(), &[3.0, 6.0]);
}

#[test]
fn test_select_rows_reorders() {
    let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid shape");
    let p = m.select_rows(&[2, 0, 1]);
    assert_eq!(p.row(0).as_slice(), &[5.0, 6.0]);
    assert_eq!(p.row(1).as_slice(), &[1.0, 2.0]);
    assert_eq!(p.row(2).as_slice(), &[3.0, 4.0]);
}

#[test]
fn test_transpose() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid shape");
    let t = m.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.get(0, 1), 4.0);
    assert_eq!(t.get(2, 0), 3.0);
}

#[test]
fn test_matmul() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid shape");
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).expect("valid shape");
    let c = a.matmul(&b).expect("compatible shapes");
    assert_eq!(c.get(0, 0), 19.0);
    assert_eq!(c.get(0, 1), 22.0);
    assert_eq!(c.get(1, 0), 43.0);
    assert_eq!(c.get(1, 1), 50.0);
}

#[test]
fn test_matmul_dimension_mismatch() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    assert!(a.matmul(&b).is_err());
}

#[test]
fn test_matvec() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid shape");
    let v = Vector::from_slice(&[1.0, 0.0, -1.0]);
    let r = m.matvec(&v).expect("compatible shapes");
    assert_eq!(r.as_slice(), &[-2.0, -2.0]);
}

#[test]
fn test_cholesky_factor_identity() {
    let mut m = Matrix::zeros(3, 3);
    for i in 0..3 {
        m.set(i, i, 1.0);
    }
    let l = m.cholesky_factor().expect("identity is SPD");
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!((l.get(i, j) - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_cholesky_factor_reconstructs() {
    // A = [[4, 2], [2, 3]] is SPD
    let a = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).expect("valid shape");
    let l = a.cholesky_factor().expect("SPD");
    let back = l.matmul(&l.transpose()).expect("square");
    for i in 0..2 {
        for j in 0..2 {
            assert!((back.get(i, j) - a.get(i, j)).abs() < 1e-5);
        }
    }
}

#[test]
fn test_cholesky_factor_not_spd() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 1.0]).expect("valid shape");
    assert!(a.cholesky_factor().is_err());
}

#[test]
fn test_cholesky_solve() {
    // [[4, 2], [2, 3]] x = [10, 8] has solution [1.75, 1.5]
    let a = Matrix::from_vec(2, 2, vec![4.0, 2.0, 2.0, 3.0]).expect("valid shape");
    let b = Vector::from_slice(&[10.0, 8.0]);
    let x = a.cholesky_solve(&b).expect("SPD system");
    assert!((x[0] - 1.75).abs() < 1e-5);
    assert!((x[1] - 1.5).abs() < 1e-5);
}

#[test]
fn test_serde_round_trip() {
    let m = Matrix::from_vec(2, 2, vec![1.0_f32, 2.0, 3.0, 4.0]).expect("valid shape");
    let json = serde_json::to_string(&m).expect("serialize");
    let back: Matrix<f32> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(m, back);
}
