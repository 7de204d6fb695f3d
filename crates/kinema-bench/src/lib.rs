//! Shared helpers for kinema benchmarks: seeded RNG, input generators.
//!
//! Every generator draws from the caller's RNG, so one seeded stream yields
//! distinct but reproducible inputs across a benchmark.

use core::f64::consts::PI;
use fastrand::Rng;
use kinema::{DhParams, Matrix, Vec3};

const SEED: u64 = 0xDEAD_BEEF_CAFE_BABE;

pub fn make_rng() -> Rng {
    Rng::with_seed(SEED)
}

/// Uniform in [-1, 1].
fn signed_unit(rng: &mut Rng) -> f64 {
    rng.f64() * 2.0 - 1.0
}

/// Uniform angle in [-π, π].
pub fn random_angle(rng: &mut Rng) -> f64 {
    signed_unit(rng) * PI
}

/// Dense matrix with entries in [-1, 1].
pub fn random_matrix(rng: &mut Rng, rows: usize, cols: usize) -> Matrix {
    Matrix::from_fn(rows, cols, |_, _| signed_unit(rng))
}

/// Square matrix with a dominant diagonal, so it always has an inverse.
pub fn random_invertible(rng: &mut Rng, n: usize) -> Matrix {
    let mut m = random_matrix(rng, n, n);
    for i in 0..n {
        m.set(i, i, m.get(i, i) + 2.0 * n as f64);
    }
    m
}

pub fn random_points(rng: &mut Rng, n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|_| Vec3::new(signed_unit(rng), signed_unit(rng), signed_unit(rng)))
        .collect()
}

/// A serial arm of `n` links with random geometry and joint angles.
pub fn random_arm(rng: &mut Rng, n: usize) -> Vec<DhParams> {
    (0..n)
        .map(|_| {
            DhParams::new(rng.f64(), random_angle(rng), signed_unit(rng), random_angle(rng))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_inputs() {
        let (mut r1, mut r2) = (make_rng(), make_rng());
        assert_eq!(random_matrix(&mut r1, 3, 3), random_matrix(&mut r2, 3, 3));
        assert_eq!(random_arm(&mut r1, 4), random_arm(&mut r2, 4));
    }

    #[test]
    fn successive_draws_differ() {
        let mut rng = make_rng();
        let a = random_matrix(&mut rng, 4, 4);
        let b = random_matrix(&mut rng, 4, 4);
        assert_ne!(a, b);
    }

    #[test]
    fn values_stay_in_range() {
        let mut rng = make_rng();
        let m = random_matrix(&mut rng, 8, 8);
        assert!(m.as_slice().iter().all(|x| (-1.0..=1.0).contains(x)));
        assert!((0..64).map(|_| random_angle(&mut rng)).all(|a| (-PI..=PI).contains(&a)));
    }

    #[test]
    fn generated_inputs_are_usable() {
        let mut rng = make_rng();
        assert!(random_invertible(&mut rng, 6).inverse().is_ok());
        assert_eq!(random_arm(&mut rng, 5).len(), 5);
        assert_eq!(random_matrix(&mut rng, 2, 3).dimensions(), (2, 3));
        assert_eq!(random_points(&mut rng, 7).len(), 7);
    }
}
