//! Rotations and homogeneous transforms.
//!
//! Everything here is a plain [`Matrix`]: 2x2/3x3 rotations, 3x3 homogeneous
//! transforms for 2D and 4x4 for 3D. Constructors cannot fail. Functions
//! that take a caller-built matrix check its shape and return
//! [`Error::DimensionMismatch`] when it is wrong.

use crate::{Error, Matrix, Result, Shape, Vec2, Vec3, Vector};

fn expect_shape(op: &'static str, m: &Matrix, rows: usize, cols: usize) -> Result<()> {
    if m.dimensions() == (rows, cols) {
        Ok(())
    } else {
        Err(Error::mismatch(op, m.shape(), Shape::new(rows, cols)))
    }
}

/// Mismatch for an operation accepting either a 3x3 or a 4x4 transform. The
/// label names both; the compared shape is the one nearer the input's larger side.
fn not_homogeneous(op: &'static str, m: &Matrix) -> Error {
    let n = if m.nrows().max(m.ncols()) <= 3 { 3 } else { 4 };
    Error::mismatch(op, m.shape(), Shape::new(n, n))
}

/// 2x2 counter-clockwise rotation.
pub fn rotation_2d(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from([[c, -s], [s, c]])
}

/// 3x3 rotation about the X axis.
pub fn rotation_x(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
}

/// 3x3 rotation about the Y axis.
pub fn rotation_y(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
}

/// 3x3 rotation about the Z axis.
pub fn rotation_z(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

// Embed an n x n rotation and an n-vector translation into (n+1) x (n+1).
fn embed(rotation: &Matrix, translation: &[f64]) -> Matrix {
    let n = translation.len();
    Matrix::from_fn(n + 1, n + 1, |i, j| match (i < n, j < n) {
        (true, true) => rotation.get(i, j),
        (true, false) => translation[i],
        (false, false) => 1.0,
        (false, true) => 0.0,
    })
}

/// 3x3 homogeneous transform: rotate by `theta`, then translate by `(tx, ty)`.
pub fn homogeneous_2d(theta: f64, tx: f64, ty: f64) -> Matrix {
    embed(&rotation_2d(theta), &[tx, ty])
}

/// 4x4 homogeneous transform from a 3x3 rotation and a translation.
pub fn homogeneous_3d(rotation: &Matrix, translation: Vec3) -> Result<Matrix> {
    expect_shape("homogeneous transform", rotation, 3, 3)?;
    Ok(embed(rotation, &translation.as_array()))
}

/// 3x3 homogeneous pure translation.
pub fn translation_2d(tx: f64, ty: f64) -> Matrix {
    embed(&Matrix::identity(2), &[tx, ty])
}

/// 4x4 homogeneous pure translation.
pub fn translation(tx: f64, ty: f64, tz: f64) -> Matrix {
    embed(&Matrix::identity(3), &[tx, ty, tz])
}

pub fn homogeneous_rotation_x(theta: f64) -> Matrix {
    embed(&rotation_x(theta), &[0.0; 3])
}

pub fn homogeneous_rotation_y(theta: f64) -> Matrix {
    embed(&rotation_y(theta), &[0.0; 3])
}

pub fn homogeneous_rotation_z(theta: f64) -> Matrix {
    embed(&rotation_z(theta), &[0.0; 3])
}

/// 3x3 homogeneous scaling.
pub fn scaling_2d(sx: f64, sy: f64) -> Matrix {
    Matrix::from_diagonal(&[sx, sy, 1.0])
}

/// 4x4 homogeneous scaling.
pub fn scaling_3d(sx: f64, sy: f64, sz: f64) -> Matrix {
    Matrix::from_diagonal(&[sx, sy, sz, 1.0])
}

/// Rotation block of a 3x3 or 4x4 homogeneous transform.
pub fn extract_rotation(t: &Matrix) -> Result<Matrix> {
    match t.dimensions() {
        (3, 3) => Ok(t.submatrix(0, 0, 2, 2)),
        (4, 4) => Ok(t.submatrix(0, 0, 3, 3)),
        _ => Err(not_homogeneous("extract rotation (3x3 or 4x4)", t)),
    }
}

/// Translation column of a 3x3 or 4x4 homogeneous transform.
pub fn extract_translation(t: &Matrix) -> Result<Vector> {
    match t.dimensions() {
        (3, 3) => Ok(Vec2::new(t.get(0, 2), t.get(1, 2)).into()),
        (4, 4) => Ok(Vec3::new(t.get(0, 3), t.get(1, 3), t.get(2, 3)).into()),
        _ => Err(not_homogeneous("extract translation (3x3 or 4x4)", t)),
    }
}

/// Apply a 3x3 homogeneous transform to a point: `R * p + t`.
pub fn transform_point_2d(t: &Matrix, p: Vec2) -> Result<Vec2> {
    expect_shape("transform point 2d", t, 3, 3)?;
    Ok(Vec2::new(
        t.get(0, 0) * p.x + t.get(0, 1) * p.y + t.get(0, 2),
        t.get(1, 0) * p.x + t.get(1, 1) * p.y + t.get(1, 2),
    ))
}

/// Apply a 4x4 homogeneous transform to a point: `R * p + t`.
pub fn transform_point_3d(t: &Matrix, p: Vec3) -> Result<Vec3> {
    expect_shape("transform point 3d", t, 4, 4)?;
    let row = |i| t.get(i, 0) * p.x + t.get(i, 1) * p.y + t.get(i, 2) * p.z + t.get(i, 3);
    Ok(Vec3::new(row(0), row(1), row(2)))
}

/// Apply only the linear block of a 4x4 transform to a free vector (w = 0).
pub fn transform_vector_3d(t: &Matrix, v: Vec3) -> Result<Vec3> {
    expect_shape("transform vector 3d", t, 4, 4)?;
    let row = |i| t.get(i, 0) * v.x + t.get(i, 1) * v.y + t.get(i, 2) * v.z;
    Ok(Vec3::new(row(0), row(1), row(2)))
}

// [R | t]^-1 = [R^T | -R^T t]. Exact for orthonormal R, no pivoting needed.
fn rigid_inverse(t: &Matrix, n: usize) -> Matrix {
    let rt = t.submatrix(0, 0, n, n).transpose();
    let translation: Vec<f64> = (0..n).map(|i| t.get(i, n)).collect();
    let back: Vec<f64> = (0..n)
        .map(|i| -rt.row(i).iter().zip(&translation).map(|(a, b)| a * b).sum::<f64>())
        .collect();
    embed(&rt, &back)
}

/// Inverse of a rigid 3x3 homogeneous transform.
///
/// Assumes the rotation block is orthonormal. Use [`Matrix::inverse`] for
/// transforms that scale or shear.
pub fn inverse_transform_2d(t: &Matrix) -> Result<Matrix> {
    expect_shape("inverse transform 2d", t, 3, 3)?;
    Ok(rigid_inverse(t, 2))
}

/// Inverse of a rigid 4x4 homogeneous transform. Same caveat as
/// [`inverse_transform_2d`].
pub fn inverse_transform_3d(t: &Matrix) -> Result<Matrix> {
    expect_shape("inverse transform 3d", t, 4, 4)?;
    Ok(rigid_inverse(t, 3))
}

/// Product of `transforms` left to right: `T0 * T1 * ... * Tn`.
pub fn compose(transforms: &[Matrix]) -> Result<Matrix> {
    let (first, rest) = transforms
        .split_first()
        .ok_or_else(|| Error::mismatch("compose", Shape::new(0, 0), Shape::new(0, 0)))?;
    rest.iter().try_fold(first.clone(), |acc, t| acc.multiply(t))
}

/// True if `r` is a 2x2 or 3x3 proper rotation: `RᵀR = I` and `det R = +1`,
/// both within `epsilon`.
pub fn is_valid_rotation(r: &Matrix, epsilon: f64) -> bool {
    let n = r.nrows();
    if !r.is_square() || !(n == 2 || n == 3) {
        return false;
    }
    let orthogonal = r.transpose().mul_unchecked(r).approx_eq(&Matrix::identity(n), epsilon);
    orthogonal && r.determinant().is_ok_and(|det| (det - 1.0).abs() <= epsilon)
}
