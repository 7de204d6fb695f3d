use crate::tolerance::DEFAULT_EPSILON;
use crate::{Error, Result};
use core::fmt;
use core::ops::{Index, IndexMut, Mul, Neg};

/// Row and column count of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// Heap-allocated dense matrix, row-major.
///
/// Element (row, col) is stored at `data[row * ncols + col]`. The shape is a
/// runtime property. Every constructor owns a fresh copy of its input, so no
/// `Matrix` ever aliases caller storage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Create from row-major data of length `nrows * ncols`.
    pub fn from_row_slice(nrows: usize, ncols: usize, data: &[f64]) -> Self {
        assert_eq!(data.len(), nrows * ncols, "Matrix: data length mismatch");
        Self { data: data.to_vec(), nrows, ncols }
    }

    /// Create from a list of rows. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), ncols, "Matrix: row {i} has {} columns, expected {ncols}", row.len());
            data.extend_from_slice(row);
        }
        Self { data, nrows, ncols }
    }

    /// Create from a function of (row, col).
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Zero matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self { data: vec![0.0; nrows * ncols], nrows, ncols }
    }

    /// Identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Square matrix with `diag` on the diagonal.
    pub fn from_diagonal(diag: &[f64]) -> Self {
        let n = diag.len();
        Self::from_fn(n, n, |i, j| if i == j { diag[i] } else { 0.0 })
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.nrows, self.ncols)
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Element access (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self[(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self[(row, col)] = val;
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Copy out as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.nrows).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self.get(j, i))
    }

    /// Matrix-matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.ncols != rhs.nrows {
            return Err(Error::mismatch("multiply", self.shape(), rhs.shape()));
        }
        Ok(self.mul_unchecked(rhs))
    }

    /// Product of operands whose shapes are fixed by construction.
    pub(crate) fn mul_unchecked(&self, rhs: &Matrix) -> Matrix {
        debug_assert_eq!(self.ncols, rhs.nrows);
        let mut c = Matrix::zeros(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let a_ik = self.get(i, k);
                for j in 0..rhs.ncols {
                    c[(i, j)] += a_ik * rhs.get(k, j);
                }
            }
        }
        c
    }

    /// Matrix-vector product `self * v`.
    pub fn apply_to_vector(&self, v: &[f64]) -> Result<Vec<f64>> {
        if self.ncols != v.len() {
            return Err(Error::mismatch("apply to vector", self.shape(), Shape::new(v.len(), 1)));
        }
        Ok((0..self.nrows)
            .map(|i| self.row(i).iter().zip(v).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Elementwise sum.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("add", rhs, |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with("subtract", rhs, |a, b| a - b)
    }

    fn zip_with(&self, op: &'static str, rhs: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        if self.shape() != rhs.shape() {
            return Err(Error::mismatch(op, self.shape(), rhs.shape()));
        }
        let data = self.data.iter().zip(&rhs.data).map(|(&a, &b)| f(a, b)).collect();
        Ok(Matrix { data, nrows: self.nrows, ncols: self.ncols })
    }

    /// Scale all elements.
    pub fn scale(&self, s: f64) -> Self {
        Self { data: self.data.iter().map(|x| x * s).collect(), nrows: self.nrows, ncols: self.ncols }
    }

    /// Trace (sum of diagonal).
    pub fn trace(&self) -> f64 {
        (0..self.nrows.min(self.ncols)).map(|i| self.get(i, i)).sum()
    }

    /// Copy with row `row` and column `col` removed. Panics if either is out of range.
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(row < self.nrows && col < self.ncols, "Matrix: minor ({row}, {col}) out of bounds for {}", self.shape());
        let mut data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));
        for i in (0..self.nrows).filter(|&i| i != row) {
            for j in (0..self.ncols).filter(|&j| j != col) {
                data.push(self.get(i, j));
            }
        }
        Self { data, nrows: self.nrows - 1, ncols: self.ncols - 1 }
    }

    /// Extract a submatrix.
    pub fn submatrix(&self, row_start: usize, col_start: usize, nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |i, j| self.get(row_start + i, col_start + j))
    }

    /// Swap two rows in place.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.data.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }

    /// Same shape and every element within `epsilon`.
    pub fn approx_eq(&self, rhs: &Matrix, epsilon: f64) -> bool {
        self.shape() == rhs.shape()
            && self.data.iter().zip(&rhs.data).all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// [`approx_eq`](Self::approx_eq) with [`DEFAULT_EPSILON`].
    pub fn approx_eq_default(&self, rhs: &Matrix) -> bool {
        self.approx_eq(rhs, DEFAULT_EPSILON)
    }

    /// Render one row per line with `precision` decimals.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        let cells: Vec<String> = self.data.iter().map(|x| format!("{x:.precision$}")).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);
        let mut out = String::new();
        for i in 0..self.nrows {
            if i > 0 {
                out.push('\n');
            }
            out.push('[');
            for j in 0..self.ncols {
                if j > 0 {
                    out.push_str(", ");
                }
                let cell = &cells[i * self.ncols + j];
                out.push_str(&format!("{cell:>width$}"));
            }
            out.push(']');
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.nrows && col < self.ncols, "Matrix: index ({row}, {col}) out of bounds for {}", self.shape());
        &self.data[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.nrows && col < self.ncols, "Matrix: index ({row}, {col}) out of bounds for {}", self.shape());
        &mut self.data[row * self.ncols + col]
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(rows: [[f64; C]; R]) -> Self {
        Self::from_rows(&rows)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.scale(-1.0)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f64) -> Matrix {
        self.scale(rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_precision(f.precision().unwrap_or(4)))
    }
}

/// Wire form of [`Matrix`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Matrix {
    type Error = Error;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        let expected = raw.nrows.checked_mul(raw.ncols);
        if expected != Some(raw.data.len()) {
            return Err(Error::mismatch(
                "deserialize",
                Shape::new(raw.data.len(), 1),
                Shape::new(expected.unwrap_or(usize::MAX), 1),
            ));
        }
        Ok(Self { data: raw.data, nrows: raw.nrows, ncols: raw.ncols })
    }
}
