use crate::errors::*;
use crate::Matrix;

impl Matrix {
    /// Determinant by Laplace (cofactor) expansion along the first row.
    ///
    /// This is O(n!) and only meant for small matrices; use `LUDecomposition::determinant` for
    /// anything bigger than a handful of rows.
    ///
    /// # Errors
    /// `IllegalOperation` if the matrix is not square.
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(illegal_operation(format!("determinant of non-square {}x{} matrix",
                self.nrows(), self.ncols())));
        }
        Ok(laplace(self))
    }

    /// Matrix with row `row` and column `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        if row >= self.nrows() || col >= self.ncols() {
            return Err(index_out_of_range(format!("({}, {}) in {}x{} matrix", row, col,
                self.nrows(), self.ncols())));
        }
        if self.nrows() < 2 || self.ncols() < 2 {
            return Err(illegal_operation(format!("no minor of a {}x{} matrix", self.nrows(),
                self.ncols())));
        }
        Ok(self.without(row, col))
    }
}

fn laplace(a: &Matrix) -> f64 {
    match a.nrows() {
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => {
            (0..n).fold(0.0, |acc, j| {
                acc + num::pow(-1.0, j) * a[(0, j)] * laplace(&a.without(0, j))
            })
        }
    }
}
