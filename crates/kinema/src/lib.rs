//! kinema: small-matrix algebra and rigid-body transforms for robot kinematics
//!
//! Three layers, bottom up:
//! - [`Vec2`], [`Vec3`] and the runtime-dimensioned [`Vector`]
//! - [`Matrix`], a dense row-major `f64` matrix with determinant and inverse
//! - [`transform`], [`euler`] and [`dh`]: rotations, homogeneous transforms,
//!   ZYX Euler angles and Denavit-Hartenberg chains, all built on `Matrix`
//!
//! # Conventions
//! - Matrices are row-major and indexed `(row, col)` from 0
//! - Right-handed axes, counter-clockwise positive rotations
//! - Euler angles compose as `Rz(yaw) * Ry(pitch) * Rx(roll)`
//! - Standard (distal) DH parameters `(a, α, d, θ)`
//!
//! Every operation is a pure function of its arguments. Failures are
//! reported through [`Error`] and never leave an input modified.

mod error;
mod inverse;
mod matrix;

pub mod dh;
pub mod euler;
pub mod tolerance;
pub mod transform;
pub mod vector;

pub use dh::{dh_chain, dh_transform, DhParams};
pub use error::{Error, Result};
pub use euler::{euler_from_rotation, rotation_from_euler, EulerAngles};
pub use matrix::{Matrix, Shape};
pub use vector::{Vec2, Vec3, Vector};

#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    // SAFETY: all fields are f64, #[repr(C)], no padding
    unsafe impl bytemuck::Zeroable for Vec2 {}
    unsafe impl bytemuck::Pod for Vec2 {}
    unsafe impl bytemuck::Zeroable for Vec3 {}
    unsafe impl bytemuck::Pod for Vec3 {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_maps_vectors_like_cross_product_frame() {
        // Columns of a rotation are the images of the basis vectors, and
        // stay right-handed: c0 x c1 = c2.
        let r = rotation_from_euler(0.3, -0.4, 1.1);
        let col = |j| Vec3::new(r.get(0, j), r.get(1, j), r.get(2, j));
        assert!(col(0).cross(col(1)).approx_eq(col(2), 1e-12));
    }

    #[test]
    fn matrix_vector_agrees_with_point_transform() {
        let t = dh_transform(0.5, 0.2, 0.1, -0.6);
        let p = Vec3::new(1.0, -2.0, 0.5);
        let via_matrix = t.apply_to_vector(&[p.x, p.y, p.z, 1.0]).unwrap();
        let via_transform = transform::transform_point_3d(&t, p).unwrap();
        assert!(Vec3::from([via_matrix[0], via_matrix[1], via_matrix[2]]).approx_eq(via_transform, 1e-12));
        assert_eq!(via_matrix[3], 1.0);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn vec3_casts_to_floats() {
        let v = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let flat: &[f64] = bytemuck::cast_slice(&v);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
