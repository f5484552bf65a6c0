//! Reference kernels over `f64` cells.
//!
//! [`CellSum`], [`CellMean`] and [`Dot`] need no scratch state.
//! [`QuadraticForm`] keeps its matrix-vector product in the cache so
//! repeated evaluation does not allocate. [`AffineMap`] returns small
//! outputs inline.

use smallvec::SmallVec;
use tessera_core::ArrayError;

use crate::kernel::Kernel;

/// Sum of a cell's values.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellSum;

impl<'a> Kernel<(&'a [f64],)> for CellSum {
    type Cache = ();
    type Output = f64;

    fn make_cache(&self, _args: &(&'a [f64],)) {}

    fn apply(&self, _cache: &mut (), (x,): (&'a [f64],)) -> f64 {
        x.iter().sum()
    }
}

/// Arithmetic mean of a cell's values; `None` for an empty cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellMean;

impl<'a> Kernel<(&'a [f64],)> for CellMean {
    type Cache = ();
    type Output = Option<f64>;

    fn make_cache(&self, _args: &(&'a [f64],)) {}

    fn apply(&self, _cache: &mut (), (x,): (&'a [f64],)) -> Option<f64> {
        if x.is_empty() {
            None
        } else {
            Some(x.iter().sum::<f64>() / x.len() as f64)
        }
    }
}

/// Inner product of two cells of equal length.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dot;

impl<'a, 'b> Kernel<(&'a [f64], &'b [f64])> for Dot {
    type Cache = ();
    type Output = f64;

    fn make_cache(&self, _args: &(&'a [f64], &'b [f64])) {}

    /// # Panics
    ///
    /// Panics if the two cells differ in length.
    fn apply(&self, _cache: &mut (), (x, y): (&'a [f64], &'b [f64])) -> f64 {
        assert_eq!(
            x.len(),
            y.len(),
            "dot product of cells with lengths {} and {}",
            x.len(),
            y.len()
        );
        x.iter().zip(y).map(|(a, b)| a * b).sum()
    }
}

/// `xᵀAx` for a dense row-major `n × n` operator `A`.
///
/// ```
/// use tessera_kernel::{Kernel, QuadraticForm};
///
/// let form = QuadraticForm::new(2, vec![2.0, 0.0, 0.0, 3.0]).unwrap();
/// let x = [1.0, 2.0];
/// let mut cache = form.make_cache(&(&x[..],));
/// assert_eq!(form.apply(&mut cache, (&x[..],)), 14.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QuadraticForm {
    n: usize,
    matrix: Vec<f64>,
}

impl QuadraticForm {
    /// Build from a row-major matrix of `n * n` entries.
    pub fn new(n: usize, matrix: Vec<f64>) -> Result<Self, ArrayError> {
        let expected = n * n;
        if matrix.len() != expected {
            return Err(ArrayError::ShapeMismatch {
                expected,
                actual: matrix.len(),
            });
        }
        Ok(Self { n, matrix })
    }

    /// Identity operator of size `n`, for which the form is `|x|²`.
    pub fn identity(n: usize) -> Self {
        let mut matrix = vec![0.0; n * n];
        for i in 0..n {
            matrix[i * n + i] = 1.0;
        }
        Self { n, matrix }
    }

    /// Dimension of the operator.
    pub fn dim(&self) -> usize {
        self.n
    }
}

impl<'a> Kernel<(&'a [f64],)> for QuadraticForm {
    /// Holds `Ax` between applications.
    type Cache = Vec<f64>;
    type Output = f64;

    fn make_cache(&self, _args: &(&'a [f64],)) -> Vec<f64> {
        vec![0.0; self.n]
    }

    /// # Panics
    ///
    /// Panics if `x.len()` differs from the operator dimension.
    fn apply(&self, ax: &mut Vec<f64>, (x,): (&'a [f64],)) -> f64 {
        assert_eq!(
            x.len(),
            self.n,
            "quadratic form of dimension {} applied to a cell of length {}",
            self.n,
            x.len()
        );
        ax.resize(self.n, 0.0);
        for (row, out) in self.matrix.chunks_exact(self.n.max(1)).zip(ax.iter_mut()) {
            *out = row.iter().zip(x).map(|(a, b)| a * b).sum();
        }
        x.iter().zip(ax.iter()).map(|(a, b)| a * b).sum()
    }
}

/// `Ax + b` for a dense row-major `rows × cols` matrix.
///
/// Outputs of up to eight entries stay inline.
#[derive(Clone, Debug, PartialEq)]
pub struct AffineMap {
    rows: usize,
    cols: usize,
    matrix: Vec<f64>,
    offset: Vec<f64>,
}

impl AffineMap {
    /// Build from a row-major matrix and an offset of length `rows`.
    pub fn new(
        rows: usize,
        cols: usize,
        matrix: Vec<f64>,
        offset: Vec<f64>,
    ) -> Result<Self, ArrayError> {
        if matrix.len() != rows * cols {
            return Err(ArrayError::ShapeMismatch {
                expected: rows * cols,
                actual: matrix.len(),
            });
        }
        if offset.len() != rows {
            return Err(ArrayError::ShapeMismatch {
                expected: rows,
                actual: offset.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            matrix,
            offset,
        })
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<'a> Kernel<(&'a [f64],)> for AffineMap {
    type Cache = ();
    type Output = SmallVec<[f64; 8]>;

    fn make_cache(&self, _args: &(&'a [f64],)) {}

    /// # Panics
    ///
    /// Panics if `x.len()` differs from the column count.
    fn apply(&self, _cache: &mut (), (x,): (&'a [f64],)) -> SmallVec<[f64; 8]> {
        assert_eq!(
            x.len(),
            self.cols,
            "affine map with {} columns applied to a cell of length {}",
            self.cols,
            x.len()
        );
        (0..self.rows)
            .map(|r| {
                let row = &self.matrix[r * self.cols..(r + 1) * self.cols];
                row.iter().zip(x).map(|(a, b)| a * b).sum::<f64>() + self.offset[r]
            })
            .collect()
    }
}
