//! Dense row-major matrix container
//!
//! [`Matrix`] owns a flat `Vec<f64>` together with its row and column counts.
//! The shape is checked once at construction, so every kernel can index the
//! buffer as `data[i * cols + j]` without re-validating row lengths.
//!
//! Matrices are value types: every operation in this crate returns a freshly
//! allocated matrix and never mutates its inputs.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Owned dense matrix of `f64` values in row-major order
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create a `rows x cols` matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create the `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Create a matrix whose entry `(i, j)` is `f(i, j)`
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Build a matrix from a sequence of rows.
    ///
    /// Every row must have the same length as the first. An empty slice
    /// produces a `0 x 0` matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(Error::invalid_argument(
                    "rows",
                    format!(
                        "row {} has length {}, expected {}",
                        i,
                        row.len(),
                        n_cols
                    ),
                ));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Wrap a flat row-major buffer
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::shape_mismatch(&[rows * cols], &[data.len()]));
        }
        Ok(Self { data, rows, cols })
    }

    /// Wrap a buffer whose length the caller has already checked
    #[inline]
    pub(crate) fn from_vec_unchecked(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Create an `n x 1` matrix from a vector
    pub fn column_vector(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
            rows: values.len(),
            cols: 1,
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// True when `rows == cols`
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when the matrix holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `(i, j)`, or `None` when out of bounds
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Borrow row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row-major view of the underlying buffer
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of the underlying buffer
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major buffer
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Copy into nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Swap rows `a` and `b` in place
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let n = self.cols;
        for j in 0..n {
            self.data.swap(a * n + j, b * n + j);
        }
    }

    /// The matrix with row `row` and column `col` removed
    ///
    /// Fails with `InvalidArgument` if `row >= rows` or `col >= cols`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::invalid_argument(
                "index",
                format!(
                    "minor ({row}, {col}) out of bounds for {}x{} matrix",
                    self.rows, self.cols
                ),
            ));
        }
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Ok(Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let row: Vec<String> = self.row(i).iter().map(|v| format!("{v:>10.4}")).collect();
            writeln!(f, "[{}]", row.join(", "))?;
        }
        Ok(())
    }
}
