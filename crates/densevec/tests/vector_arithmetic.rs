//! Integration tests for DenseVector construction and arithmetic.

use densevec::{DenseVector, VectorError};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_LEN: usize = 1000;
const RUNS: usize = 100;

fn random_pair(rng: &mut StdRng) -> (Vec<f64>, Vec<f64>) {
    let len = Uniform::new_inclusive(1, MAX_LEN).sample(rng);
    let values = Uniform::new(-(MAX_LEN as f64), MAX_LEN as f64);
    let lhs = (0..len).map(|_| values.sample(rng)).collect();
    let rhs = (0..len).map(|_| values.sample(rng)).collect();
    (lhs, rhs)
}

fn build(data: &[f64]) -> DenseVector {
    let mut v = DenseVector::new(data.len());
    for (i, value) in data.iter().enumerate() {
        v[i] = *value;
    }
    v
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn default_is_empty() {
    let v = DenseVector::default();
    assert_eq!(v.len(), 0);
    assert!(v.is_empty());
}

#[test]
fn new_is_zero_filled() {
    let v = DenseVector::new(5);
    assert_eq!(v.len(), 5);
    assert!(v.iter().all(|x| *x == 0.0));
}

#[test]
fn from_elem_fills_value() {
    let v = DenseVector::from_elem(4, 2.5);
    assert_eq!(v.to_vec(), vec![2.5; 4]);
}

#[test]
fn clone_is_independent() {
    let source = DenseVector::from_vec(vec![1.0, 2.0, 3.0]);
    let mut copy = source.clone();
    copy[0] = 100.0;
    assert_eq!(source[0], 1.0);
    assert_eq!(copy[0], 100.0);
}

#[test]
fn assign_replaces_length_and_contents() {
    let mut target = DenseVector::new(10);
    let source = DenseVector::from_vec(vec![4.0, 5.0]);
    target.assign(&source);
    assert_eq!(target, source);
    target[1] = 0.0;
    assert_eq!(source[1], 5.0);
}

#[test]
fn resize_zero_fills_new_elements() {
    let mut v = DenseVector::from_elem(2, 1.0);
    v.resize(4);
    assert_eq!(v.to_vec(), vec![1.0, 1.0, 0.0, 0.0]);
    v.resize(1);
    assert_eq!(v.len(), 1);
}

#[test]
fn checked_access_returns_none_out_of_range() {
    let mut v = DenseVector::new(2);
    assert_eq!(v.get(1), Some(&0.0));
    assert_eq!(v.get(2), None);
    assert!(v.get_mut(5).is_none());
}

#[test]
fn conversions_preserve_order() {
    let v: DenseVector = (0..4).map(|i| i as f64).collect();
    let back: Vec<f64> = v.clone().into();
    assert_eq!(back, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(DenseVector::from(&back[..2]), DenseVector::from(vec![0.0, 1.0]));
}

// ---------------------------------------------------------------------------
// Addition / subtraction
// ---------------------------------------------------------------------------

#[test]
fn add_matches_elementwise_sum() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..RUNS {
        let (lhs, rhs) = random_pair(&mut rng);
        let sum = build(&lhs).try_add(&build(&rhs)).unwrap();
        assert_eq!(sum.len(), lhs.len());
        for i in 0..lhs.len() {
            assert_eq!(sum[i], lhs[i] + rhs[i]);
        }
    }
}

#[test]
fn sub_matches_elementwise_difference() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..RUNS {
        let (lhs, rhs) = random_pair(&mut rng);
        let diff = build(&lhs).try_sub(&build(&rhs)).unwrap();
        assert_eq!(diff.len(), lhs.len());
        for i in 0..lhs.len() {
            assert_eq!(diff[i], lhs[i] - rhs[i]);
        }
    }
}

#[test]
fn add_of_empty_vectors_is_empty() {
    let sum = DenseVector::default().try_add(&DenseVector::default()).unwrap();
    assert!(sum.is_empty());
}

#[test]
fn mismatched_lengths_are_reported() {
    let a = DenseVector::new(3);
    let b = DenseVector::new(4);

    for (op, result) in [("add", a.try_add(&b)), ("sub", a.try_sub(&b))] {
        match result {
            Err(VectorError::DimensionMismatch { op: got, lhs, rhs }) => {
                assert_eq!(got, op);
                assert_eq!((lhs, rhs), (3, 4));
            }
            other => panic!("expected dimension mismatch, got {:?}", other),
        }
    }

    let err = a.dot(&b).unwrap_err();
    assert!(matches!(err, VectorError::DimensionMismatch { op: "dot", lhs: 3, rhs: 4 }));
    assert!(err.to_string().contains("3 and 4"));
}

// ---------------------------------------------------------------------------
// Negation / scaling
// ---------------------------------------------------------------------------

#[test]
fn negation_flips_every_sign() {
    let v = DenseVector::from_vec(vec![1.0, -2.0, 0.5]);
    assert_eq!((-&v).to_vec(), vec![-1.0, 2.0, -0.5]);
    assert!((-DenseVector::default()).is_empty());
}

#[test]
fn scaling_both_sides_agree() {
    let v = DenseVector::from_vec(vec![1.5, -3.0, 8.0]);
    let right = &v * 2.0;
    let left = 2.0 * &v;
    assert_eq!(right, left);
    assert_eq!(right, v.scale(2.0));
    assert_eq!(right.to_vec(), vec![3.0, -6.0, 16.0]);
}

#[test]
fn mul_assign_scales_in_place() {
    let mut v = DenseVector::from_elem(3, 2.0);
    v *= -0.5;
    assert_eq!(v.to_vec(), vec![-1.0; 3]);
}

// ---------------------------------------------------------------------------
// Dot / norm / normalize
// ---------------------------------------------------------------------------

#[test]
fn dot_product_of_known_vectors() {
    let a = DenseVector::from_vec(vec![1.0, 2.0, 3.0]);
    let b = DenseVector::from_vec(vec![4.0, -5.0, 6.0]);
    assert_eq!(a.dot(&b).unwrap(), 12.0);
}

#[test]
fn norm_of_empty_is_zero() {
    assert_eq!(DenseVector::default().norm(), 0.0);
}

#[test]
fn norm_of_three_four() {
    assert_eq!(DenseVector::from_vec(vec![3.0, 4.0]).norm(), 5.0);
}

#[test]
fn normalize_zero_vector_is_noop() {
    let mut v = DenseVector::zeros(4);
    v.normalize();
    assert_eq!(v, DenseVector::zeros(4));
}

#[test]
fn normalize_tiny_vector_is_bitwise_unchanged() {
    let original = DenseVector::from_vec(vec![1e-12, -3e-12, 5e-13]);
    let mut v = original.clone();
    v.normalize();
    for (a, b) in v.iter().zip(original.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn normalize_random_vectors_gives_unit_norm() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..RUNS {
        let (data, _) = random_pair(&mut rng);
        let mut v = DenseVector::from_vec(data);
        v.normalize();
        approx::assert_abs_diff_eq!(v.norm(), 1.0, epsilon = 1e-12);
    }
}
