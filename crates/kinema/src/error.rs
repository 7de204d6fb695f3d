//! Error types for kinema.

use crate::Shape;

/// Errors raised by matrix, vector and transform operations.
///
/// All of them are reported at the offending call, before any output is
/// produced. Inputs are never touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },

    /// Determinant or inverse requested on a non-square matrix.
    #[error("{op} requires a square matrix, got {shape}")]
    NotSquare { op: &'static str, shape: Shape },

    /// The matrix has no inverse under the fixed singularity tolerance.
    #[error("matrix is singular (|det| = {det:e} is below the singularity tolerance)")]
    Singular { det: f64 },
}

impl Error {
    pub(crate) fn mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
