use approx::assert_abs_diff_eq;
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use kinema::transform::{
    homogeneous_2d, homogeneous_3d, inverse_transform_2d, inverse_transform_3d, is_valid_rotation,
    rotation_2d, rotation_x, rotation_y, rotation_z, transform_point_3d,
};
use kinema::{dh_transform, euler_from_rotation, rotation_from_euler, Error, Matrix, Vec3};

const TRIALS: usize = 200;

fn uniform(rng: &mut fastrand::Rng, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.f64()
}

fn random_matrix(rng: &mut fastrand::Rng, rows: usize, cols: usize) -> Matrix {
    Matrix::from_fn(rows, cols, |_, _| uniform(rng, -1.0, 1.0))
}

// Diagonally dominant, hence comfortably non-singular.
fn random_invertible(rng: &mut fastrand::Rng, n: usize) -> Matrix {
    let mut m = random_matrix(rng, n, n);
    for i in 0..n {
        let sign = if rng.bool() { 1.0 } else { -1.0 };
        m.set(i, i, sign * (n as f64 + uniform(rng, 0.5, 2.0)));
    }
    m
}

fn random_vec3(rng: &mut fastrand::Rng) -> Vec3 {
    Vec3::new(uniform(rng, -10.0, 10.0), uniform(rng, -10.0, 10.0), uniform(rng, -10.0, 10.0))
}

#[test]
fn identity_is_neutral_for_multiply() {
    let mut rng = fastrand::Rng::with_seed(1);
    for _ in 0..TRIALS {
        let (r, c) = (rng.usize(1..=5), rng.usize(1..=5));
        let a = random_matrix(&mut rng, r, c);
        assert!(a.multiply(&Matrix::identity(c)).unwrap().approx_eq(&a, 1e-10));
        assert!(Matrix::identity(r).multiply(&a).unwrap().approx_eq(&a, 1e-10));
    }
}

#[test]
fn inverse_law_sizes_one_to_six() {
    let mut rng = fastrand::Rng::with_seed(2);
    for n in 1..=6 {
        for _ in 0..TRIALS / 4 {
            let a = random_invertible(&mut rng, n);
            let ai = a.inverse().unwrap();
            let id = Matrix::identity(n);
            assert!(a.multiply(&ai).unwrap().approx_eq(&id, 1e-10), "A * A^-1 != I for n = {n}");
            assert!(ai.multiply(&a).unwrap().approx_eq(&id, 1e-10), "A^-1 * A != I for n = {n}");
        }
    }
}

#[test]
fn inverse_agrees_with_determinant() {
    let mut rng = fastrand::Rng::with_seed(3);
    for n in 1..=5 {
        let a = random_invertible(&mut rng, n);
        let det = a.determinant().unwrap();
        let det_inv = a.inverse().unwrap().determinant().unwrap();
        assert_abs_diff_eq!(det * det_inv, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn determinant_edge_cases() {
    assert_eq!(Matrix::from([[5.0]]).determinant().unwrap(), 5.0);
    assert_eq!(Matrix::from([[1.0, 2.0], [2.0, 4.0]]).determinant().unwrap(), 0.0);

    let mut rng = fastrand::Rng::with_seed(4);
    for n in 1..=5 {
        let mut a = random_matrix(&mut rng, n, n);
        let zero_row = rng.usize(0..n);
        for j in 0..n {
            a.set(zero_row, j, 0.0);
        }
        assert_eq!(a.determinant().unwrap(), 0.0, "zero row {zero_row} of {n}x{n}");
    }
}

#[test]
fn concrete_scenarios() {
    let product = Matrix::from([[1.0, 2.0], [3.0, 4.0]])
        .multiply(&Matrix::from([[5.0, 6.0], [7.0, 8.0]]))
        .unwrap();
    assert_eq!(product, Matrix::from([[19.0, 22.0], [43.0, 50.0]]));

    let det = Matrix::from([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]).determinant().unwrap();
    assert_abs_diff_eq!(det, 1.0, epsilon = 1e-12);

    let p = transform_point_3d(&dh_transform(1.0, FRAC_PI_2, 0.5, FRAC_PI_4), Vec3::zero()).unwrap();
    assert_abs_diff_eq!(p.x, FRAC_PI_4.cos(), epsilon = 1e-10);
    assert_abs_diff_eq!(p.y, FRAC_PI_4.sin(), epsilon = 1e-10);
    assert_abs_diff_eq!(p.z, 0.5, epsilon = 1e-10);

    let locked = euler_from_rotation(&rotation_from_euler(0.2, FRAC_PI_2, -0.9)).unwrap();
    assert_eq!(locked.yaw, 0.0);
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..TRIALS {
        let (r, c) = (rng.usize(1..=6), rng.usize(1..=6));
        let a = random_matrix(&mut rng, r, c);
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn euler_roundtrip_away_from_gimbal_lock() {
    let mut rng = fastrand::Rng::with_seed(6);
    for _ in 0..TRIALS {
        let roll = uniform(&mut rng, -PI + 1e-3, PI - 1e-3);
        let pitch = uniform(&mut rng, -FRAC_PI_2 + 0.05, FRAC_PI_2 - 0.05);
        let yaw = uniform(&mut rng, -PI + 1e-3, PI - 1e-3);

        let r = rotation_from_euler(roll, pitch, yaw);
        let e = euler_from_rotation(&r).unwrap();
        assert_abs_diff_eq!(e.roll, roll, epsilon = 1e-5);
        assert_abs_diff_eq!(e.pitch, pitch, epsilon = 1e-5);
        assert_abs_diff_eq!(e.yaw, yaw, epsilon = 1e-5);
        assert!(e.to_matrix().approx_eq(&r, 1e-10));
    }
}

#[test]
fn euler_gimbal_lock_preserves_rotation() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..TRIALS {
        let pitch = if rng.bool() { FRAC_PI_2 } else { -FRAC_PI_2 };
        let r = rotation_from_euler(uniform(&mut rng, -PI, PI), pitch, uniform(&mut rng, -PI, PI));
        let e = euler_from_rotation(&r).unwrap();
        assert_eq!(e.yaw, 0.0);
        assert!(e.to_matrix().approx_eq(&r, 1e-10));
    }
}

#[test]
fn rigid_inverse_undoes_transform() {
    let mut rng = fastrand::Rng::with_seed(8);
    for _ in 0..TRIALS {
        let r = rotation_from_euler(
            uniform(&mut rng, -PI, PI),
            uniform(&mut rng, -PI, PI),
            uniform(&mut rng, -PI, PI),
        );
        let t = homogeneous_3d(&r, random_vec3(&mut rng)).unwrap();
        let ti = inverse_transform_3d(&t).unwrap();
        assert!(t.multiply(&ti).unwrap().approx_eq(&Matrix::identity(4), 1e-10));

        let (theta, tx, ty) = (uniform(&mut rng, -PI, PI), uniform(&mut rng, -10.0, 10.0), uniform(&mut rng, -10.0, 10.0));
        let t2 = homogeneous_2d(theta, tx, ty);
        let t2i = inverse_transform_2d(&t2).unwrap();
        assert!(t2.multiply(&t2i).unwrap().approx_eq(&Matrix::identity(3), 1e-10));
    }
}

#[test]
fn generated_rotations_are_valid() {
    let mut rng = fastrand::Rng::with_seed(9);
    for _ in 0..TRIALS {
        let a = uniform(&mut rng, -2.0 * PI, 2.0 * PI);
        assert!(is_valid_rotation(&rotation_2d(a), 1e-10));
        assert!(is_valid_rotation(&rotation_x(a), 1e-10));
        assert!(is_valid_rotation(&rotation_y(a), 1e-10));
        assert!(is_valid_rotation(&rotation_z(a), 1e-10));
        let e = rotation_from_euler(a, uniform(&mut rng, -PI, PI), uniform(&mut rng, -PI, PI));
        assert!(is_valid_rotation(&e, 1e-10));
    }
}

#[test]
fn non_rotations_are_rejected() {
    assert!(!is_valid_rotation(&Matrix::from_diagonal(&[2.0, 1.0, 1.0]), 1e-10));
    assert!(!is_valid_rotation(&Matrix::from_diagonal(&[-1.0, 1.0, 1.0]), 1e-10));
    assert!(!is_valid_rotation(&Matrix::zeros(3, 2), 1e-10));
}

#[test]
fn cross_product_properties() {
    let mut rng = fastrand::Rng::with_seed(10);
    for _ in 0..TRIALS {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        let c = a.cross(b);
        assert!(c.approx_eq(-b.cross(a), 1e-10));
        assert_abs_diff_eq!(a.dot(c), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.dot(c), 0.0, epsilon = 1e-9);
        assert!(a.cross(a * uniform(&mut rng, -3.0, 3.0)).approx_eq(Vec3::zero(), 1e-10));
    }
}

#[test]
fn vector_module_is_public() {
    use kinema::vector::{Vec3 as V3, Vector};
    let a = Vector::from(V3::new(3.0, 0.0, 0.0));
    let b = Vector::from(V3::new(1.0, 1.0, 0.0));
    assert_eq!(a.project_onto(b).unwrap(), Vector::from(V3::new(1.5, 1.5, 0.0)));
}

#[test]
fn errors_are_deterministic() {
    let a = Matrix::zeros(2, 3);
    assert!(matches!(a.multiply(&a), Err(Error::DimensionMismatch { .. })));
    assert!(matches!(a.determinant(), Err(Error::NotSquare { .. })));
    assert!(matches!(a.inverse(), Err(Error::NotSquare { .. })));
    assert!(matches!(Matrix::zeros(5, 5).inverse(), Err(Error::Singular { .. })));
}
