//! Determinant and inverse.
//!
//! Sizes up to 3x3 use closed forms. Larger determinants use Laplace
//! expansion along the first row, which is O(n!) and only reasonable for the
//! small matrices this crate targets. Larger inverses use Gauss-Jordan
//! elimination with partial pivoting.

use crate::tolerance::SINGULAR_TOLERANCE;
use crate::{Error, Matrix, Result};

impl Matrix {
    /// Determinant of a square matrix. The 0x0 determinant is 1.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(Error::NotSquare { op: "determinant", shape: self.shape() });
        }
        Ok(det_unchecked(self))
    }

    /// Inverse of a square matrix.
    ///
    /// Fails with [`Error::Singular`] when `|det| < SINGULAR_TOLERANCE`, or,
    /// above 3x3, when no pivot of at least that magnitude remains.
    pub fn inverse(&self) -> Result<Matrix> {
        if !self.is_square() {
            tracing::debug!(shape = %self.shape(), "inverse of non-square matrix");
            return Err(Error::NotSquare { op: "inverse", shape: self.shape() });
        }
        let n = self.nrows();
        if n > 3 {
            return gauss_jordan_inverse(self);
        }

        let det = det_unchecked(self);
        if det.abs() < SINGULAR_TOLERANCE {
            tracing::debug!(det, "singular matrix");
            return Err(Error::Singular { det });
        }
        let inv_det = det.recip();
        let m = |r, c| self.get(r, c);
        let inv = match n {
            0 => Matrix::zeros(0, 0),
            1 => Matrix::from([[inv_det]]),
            2 => Matrix::from([
                [m(1, 1) * inv_det, -m(0, 1) * inv_det],
                [-m(1, 0) * inv_det, m(0, 0) * inv_det],
            ]),
            // Adjugate (transposed cofactors) over the determinant.
            _ => Matrix::from([
                [
                    (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1)) * inv_det,
                    (m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2)) * inv_det,
                    (m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1)) * inv_det,
                ],
                [
                    (m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2)) * inv_det,
                    (m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0)) * inv_det,
                    (m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2)) * inv_det,
                ],
                [
                    (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0)) * inv_det,
                    (m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1)) * inv_det,
                    (m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0)) * inv_det,
                ],
            ]),
        };
        Ok(inv)
    }
}

fn det_unchecked(a: &Matrix) -> f64 {
    let m = |r, c| a.get(r, c);
    match a.nrows() {
        0 => 1.0,
        1 => m(0, 0),
        2 => m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
        3 => {
            m(0, 0) * (m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1))
                - m(0, 1) * (m(1, 0) * m(2, 2) - m(1, 2) * m(2, 0))
                + m(0, 2) * (m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0))
        }
        n => (0..n)
            .filter(|&j| m(0, j) != 0.0)
            .map(|j| {
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                sign * m(0, j) * det_unchecked(&a.minor(0, j))
            })
            .sum(),
    }
}

/// Gauss-Jordan on `[A | I]` with partial pivoting.
///
/// The determinant falls out of the pivots (with one sign flip per swap) and
/// is held to the same tolerance as the closed-form path.
fn gauss_jordan_inverse(a: &Matrix) -> Result<Matrix> {
    let n = a.nrows();
    let mut lhs = a.clone();
    let mut inv = Matrix::identity(n);
    let mut det = 1.0;

    for k in 0..n {
        // Pivot: largest |lhs[i][k]| for i >= k
        let mut max_val = 0.0;
        let mut max_row = k;
        for i in k..n {
            let v = lhs.get(i, k).abs();
            if v > max_val {
                max_val = v;
                max_row = i;
            }
        }

        if max_val < SINGULAR_TOLERANCE {
            tracing::debug!(column = k, pivot = max_val, "no usable pivot");
            return Err(Error::Singular { det: 0.0 });
        }

        if max_row != k {
            tracing::trace!(from = max_row, to = k, "pivot swap");
            lhs.swap_rows(k, max_row);
            inv.swap_rows(k, max_row);
            det = -det;
        }

        let pivot = lhs.get(k, k);
        det *= pivot;
        let pivot_inv = pivot.recip();
        for j in 0..n {
            lhs[(k, j)] *= pivot_inv;
            inv[(k, j)] *= pivot_inv;
        }

        for i in (0..n).filter(|&i| i != k) {
            let factor = lhs.get(i, k);
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                lhs[(i, j)] -= factor * lhs.get(k, j);
                inv[(i, j)] -= factor * inv.get(k, j);
            }
        }
    }

    if det.abs() < SINGULAR_TOLERANCE {
        tracing::debug!(det, "singular matrix");
        return Err(Error::Singular { det });
    }
    Ok(inv)
}
