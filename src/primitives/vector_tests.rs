use super::*;

#[test]
fn test_from_slice_and_len() {
    let v = Vector::from_slice(&[1.0_f32, 2.0, 3.0]);
    assert_eq!(v.len(), 3);
    assert!(!v.is_empty());
}

#[test]
fn test_empty_vector() {
    let v: Vector<f32> = Vector::from_vec(vec![]);
    assert!(v.is_empty());
    assert_eq!(v.sum(), 0.0);
    assert_eq!(v.mean(), 0.0);
}

#[test]
fn test_sum_and_mean() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    assert!((v.sum() - 10.0).abs() < 1e-6);
    assert!((v.mean() - 2.5).abs() < 1e-6);
}

#[test]
fn test_dot_commutative() {
    let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0, 5.0, 6.0]);
    let uv = u.dot(&v);
    let vu = v.dot(&u);
    assert!((uv - vu).abs() < 1e-6);
    assert!((uv - 32.0).abs() < 1e-6);
}

#[test]
fn test_norm() {
    let v = Vector::from_slice(&[-3.0, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-5);
}

#[test]
fn test_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0, 0.0, -1.0, 2.0]);
    assert!(u.dot(&v).abs() <= u.norm() * v.norm() + 1e-5);
}

#[test]
fn test_index() {
    let mut v = Vector::from_slice(&[1.0, 2.0]);
    assert_eq!(v[1], 2.0);
    v[0] = 7.0;
    assert_eq!(v[0], 7.0);
}

#[test]
fn test_zeros() {
    let v = Vector::zeros(4);
    assert_eq!(v.len(), 4);
    assert_eq!(v.sum(), 0.0);
}

#[test]
#[should_panic(expected = "length mismatch")]
fn test_dot_length_mismatch_panics() {
    let u = Vector::from_slice(&[1.0, 2.0]);
    let v = Vector::from_slice(&[1.0]);
    let _ = u.dot(&v);
}

#[test]
fn test_serde_round_trip() {
    let v = Vector::from_slice(&[1.0_f32, 2.5, -3.0]);
    let json = serde_json::to_string(&v).expect("serialize");
    let back: Vector<f32> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(v, back);
}
