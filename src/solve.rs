use crate::constants::{DEFAULT_PIVOT_THRESHOLD, SINGULARITY_EPSILON};
use crate::decompose::LUDecompose;
use crate::errors::*;
use crate::{Matrix, Vector};

pub trait Solve: Sized {
    type Rhs;
    type Output;

    /// Solves `A x = b` with the default pivot threshold.
    fn solve(&self, b: &Self::Rhs) -> Result<Self::Output>;
    fn solve_with_threshold(&self, b: &Self::Rhs, pivot_threshold: f64)
        -> Result<Self::Output>;
    /// Inverts in place. Nothing is modified if the inversion fails.
    fn inverse(&mut self) -> Result<()>;
    fn inverted(&self) -> Result<Self>;
}

impl Solve for Matrix {
    type Rhs = Vector;
    type Output = Vector;

    fn solve(&self, b: &Vector) -> Result<Vector> {
        self.solve_with_threshold(b, DEFAULT_PIVOT_THRESHOLD)
    }

    fn solve_with_threshold(&self, b: &Vector, pivot_threshold: f64) -> Result<Vector> {
        if b.size() != self.nrows() {
            return Err(dimension_mismatch(format!(
                "right-hand side has size {}, expected {}", b.size(), self.nrows())));
        }
        self.lu(pivot_threshold)?.solve(b)
    }

    /// Gauss-Jordan elimination on a working copy, choosing the largest remaining entry of each
    /// column as pivot.
    ///
    /// # Errors
    /// * `IllegalOperation` if the matrix is not square.
    /// * `SingularMatrix` if the determinant is numerically zero, i.e. some column has no pivot
    ///   candidate larger than `SINGULARITY_EPSILON * n * max|a_ij|`. The cutoff follows the
    ///   scale of the matrix, so `k * A` is singular exactly when `A` is.
    fn inverse(&mut self) -> Result<()> {
        if !self.is_square() {
            return Err(illegal_operation(format!("inverse of non-square {}x{} matrix",
                self.nrows(), self.ncols())));
        }
        let n = self.nrows();
        debug!("Gauss-Jordan inversion of {}x{} matrix", n, n);

        let largest = self.iter().fold(0.0, |acc: f64, f| acc.max(f.abs()));
        let cutoff = SINGULARITY_EPSILON * n as f64 * largest;

        let mut work = self.clone();
        let mut inv = Matrix::eye(n)?;

        for k in 0..n {
            let mut p = k;
            for i in (k + 1)..n {
                if work[(i, k)].abs() > work[(p, k)].abs() {
                    p = i;
                }
            }
            let pivot = work[(p, k)];
            if !(pivot.abs() > cutoff) {
                warn!("no usable pivot in column {} (largest {:e}, cutoff {:e})", k, pivot,
                    cutoff);
                return Err(singular_matrix(format!(
                    "column {} has no pivot larger than {:e}", k, cutoff)));
            }
            if p != k {
                trace!("swap rows {} and {}", k, p);
                work.swap_rows(k, p);
                inv.swap_rows(k, p);
            }

            for j in 0..n {
                work[(k, j)] /= pivot;
                inv[(k, j)] /= pivot;
            }

            for i in (0..n).filter(|&i| i != k) {
                let factor = work[(i, k)];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    let (wkj, ikj) = (work[(k, j)], inv[(k, j)]);
                    work[(i, j)] -= factor * wkj;
                    inv[(i, j)] -= factor * ikj;
                }
            }
        }

        *self = inv;
        Ok(())
    }

    fn inverted(&self) -> Result<Matrix> {
        let mut out = self.clone();
        out.inverse()?;
        Ok(out)
    }
}
