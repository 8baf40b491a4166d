#![allow(dead_code)]

use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Map, Value};

pub const BASES: [u32; 6] = [2, 7, 10, 16, 36, 15];

pub fn eval_polynomial(coefficients: &[BigUint], x: u64) -> BigUint {
    let mut result = BigUint::zero();
    for c in coefficients.iter().rev() {
        result = result * x + c;
    }
    result
}

pub fn random_polynomial(seed: u64, degree: usize, bits: u64) -> Vec<BigUint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..=degree).map(|_| rng.gen_biguint(bits)).collect()
}

/// Share document for the polynomial sampled at `xs`, cycling through
/// `BASES` and alternating digit case.
pub fn share_document(coefficients: &[BigUint], xs: &[u64], threshold: usize) -> Value {
    let points = xs
        .iter()
        .map(|&x| (x, eval_polynomial(coefficients, x)))
        .collect::<Vec<_>>();
    document_from_points(&points, xs.len(), threshold)
}

pub fn document_from_points(points: &[(u64, BigUint)], n: usize, k: usize) -> Value {
    let mut root = Map::new();
    root.insert("keys".to_string(), json!({ "n": n, "k": k }));
    for (i, (x, y)) in points.iter().enumerate() {
        let base = BASES[i % BASES.len()];
        let mut digits = y.to_str_radix(base);
        if i % 2 == 1 {
            digits = digits.to_uppercase();
        }
        root.insert(
            x.to_string(),
            json!({ "base": base.to_string(), "value": digits }),
        );
    }
    Value::Object(root)
}
