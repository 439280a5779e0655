//! LU (LR) decomposition without pivoting.
//!
//! `LUDecomposition` factors a square matrix `A` into a unit lower-triangular `L` and an
//! upper-triangular `R` with `A = L * R` using the Doolittle recurrence. No rows are exchanged,
//! so a matrix whose leading principal minors vanish (for instance `[[0, 1], [1, 0]]`) is
//! rejected as singular even though it is invertible. The caller picks the pivot threshold; a
//! threshold that is too small can let a nearly singular matrix through, and solutions computed
//! from such a factorization are unreliable.

use num::One;

use crate::constants::DEFAULT_PIVOT_THRESHOLD;
use crate::errors::*;
use crate::operations;
use crate::{Matrix, Vector};

/// Rebuilds a matrix from its factors.
pub trait Compose<T> {
    fn compose(&self) -> Result<T>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// `L` is the identity and `R` is zero; nothing may be read yet.
    Uninitialized,
    /// `execute` succeeded and `L`, `R` hold the factors of `A`.
    Decomposed,
}

#[derive(Debug, Clone)]
pub struct LUDecomposition<'a> {
    a: &'a Matrix,
    l: Matrix,
    r: Matrix,
    state: State,
}

impl<'a> LUDecomposition<'a> {
    /// Prepares the decomposition of `a`, seeding `L` with the identity and `R` with zeros.
    ///
    /// # Errors
    /// `IllegalOperation` if `a` is not square.
    pub fn new(a: &'a Matrix) -> Result<LUDecomposition<'a>> {
        if !a.is_square() {
            return Err(illegal_operation(format!("LU decomposition of non-square {}x{} matrix",
                a.nrows(), a.ncols())));
        }
        let (l, r) = seed(a)?;
        Ok(LUDecomposition {
            a: a,
            l: l,
            r: r,
            state: State::Uninitialized,
        })
    }

    /// Runs the Doolittle recurrence. For each `k`, row `k` of `R` is computed first, then the
    /// pivot `R[k][k]` is checked against `pivot_threshold`, then column `k` of `L` below the
    /// diagonal is filled in.
    ///
    /// The factors are rebuilt from scratch on every call. On failure the decomposition returns
    /// to `Uninitialized`.
    ///
    /// # Errors
    /// * `IllegalOperation` if `pivot_threshold` is negative or NaN.
    /// * `SingularMatrix` if some `|R[k][k]|` is below `pivot_threshold` or exactly zero; the
    ///   matrix would need row exchanges to be factored.
    pub fn execute(&mut self, pivot_threshold: f64) -> Result<()> {
        self.reset()?;
        if !(pivot_threshold >= 0.0) {
            return Err(illegal_operation(format!("pivot threshold must be non-negative, got {}",
                pivot_threshold)));
        }

        let (mut l, mut r) = seed(self.a)?;

        let a = self.a;
        let n = a.nrows();
        debug!("LU decomposition of {}x{} matrix (pivot threshold {:e})", n, n, pivot_threshold);

        for k in 0..n {
            for j in k..n {
                let sum = (0..k).fold(0.0, |acc, s| acc + l[(k, s)] * r[(s, j)]);
                r[(k, j)] = a[(k, j)] - sum;
            }

            let pivot = r[(k, k)];
            trace!("LU step {}: pivot {:e}", k, pivot);
            if pivot.abs() < pivot_threshold || pivot == 0.0 {
                warn!("LU pivot {:e} at row {} is below threshold {:e}", pivot, k,
                    pivot_threshold);
                self.reset()?;
                return Err(singular_matrix(format!(
                    "pivot {:e} at row {} is below threshold {:e}; the matrix cannot be \
                    factored without pivoting", pivot, k, pivot_threshold)));
            }

            for i in (k + 1)..n {
                let sum = (0..k).fold(0.0, |acc, s| acc + l[(i, s)] * r[(s, k)]);
                l[(i, k)] = (a[(i, k)] - sum) / pivot;
            }
        }

        self.l = l;
        self.r = r;
        self.state = State::Decomposed;
        debug!("LU decomposition of {}x{} matrix finished", n, n);
        Ok(())
    }

    pub fn state(&self) -> State { self.state }
    pub fn is_decomposed(&self) -> bool { self.state == State::Decomposed }

    /// The matrix being decomposed.
    pub fn matrix(&self) -> &Matrix { self.a }

    /// Unit lower-triangular factor.
    pub fn l(&self) -> Result<&Matrix> {
        self.check_decomposed("L")?;
        Ok(&self.l)
    }
    /// Upper-triangular factor.
    pub fn r(&self) -> Result<&Matrix> {
        self.check_decomposed("R")?;
        Ok(&self.r)
    }

    /// Determinant of `R`, which equals the determinant of `A` since `L` has a unit diagonal.
    pub fn determinant(&self) -> Result<f64> {
        self.check_decomposed("determinant")?;
        Ok((0..self.r.nrows()).fold(f64::one(), |acc, i| acc * self.r[(i, i)]))
    }

    /// Solves `A x = b` by forward substitution on `L y = b` followed by backward substitution
    /// on `R x = y`.
    ///
    /// # Errors
    /// * `IllegalOperation` before a successful `execute`.
    /// * `DimensionMismatch` if `b.size()` differs from the dimension of `A`.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        self.check_decomposed("solve")?;
        let n = self.a.nrows();
        if b.size() != n {
            return Err(dimension_mismatch(format!(
                "right-hand side has size {}, expected {}", b.size(), n)));
        }
        let b = b.as_slice();
        let (l, r) = (&self.l, &self.r);

        let mut y = vec![0.0; n];
        for i in 0..n {
            let sum = (0..i).fold(0.0, |acc, k| acc + l[(i, k)] * y[k]);
            y[i] = b[i] - sum;
        }

        let mut x = vec![0.0; n];
        for i in (0..n).rev() {
            let sum = ((i + 1)..n).fold(0.0, |acc, k| acc + r[(i, k)] * x[k]);
            x[i] = (y[i] - sum) / r[(i, i)];
        }

        Ok(Vector::from_vec(x))
    }

    fn reset(&mut self) -> Result<()> {
        let (l, r) = seed(self.a)?;
        self.l = l;
        self.r = r;
        self.state = State::Uninitialized;
        Ok(())
    }

    fn check_decomposed(&self, what: &str) -> Result<()> {
        if self.state != State::Decomposed {
            return Err(illegal_operation(format!(
                "{} requested before the decomposition was executed", what)));
        }
        Ok(())
    }
}

fn seed(a: &Matrix) -> Result<(Matrix, Matrix)> {
    let n = a.nrows();
    Ok((operations::identity(n)?, Matrix::zeros(n, n)?))
}

impl<'a> Compose<Matrix> for LUDecomposition<'a> {
    fn compose(&self) -> Result<Matrix> {
        operations::multiply(self.l()?, self.r()?)
    }
}

pub trait LUDecompose {
    /// Builds and executes the decomposition in one call.
    fn lu(&self, pivot_threshold: f64) -> Result<LUDecomposition>;

    fn lu_default(&self) -> Result<LUDecomposition> {
        self.lu(DEFAULT_PIVOT_THRESHOLD)
    }
}

impl LUDecompose for Matrix {
    fn lu(&self, pivot_threshold: f64) -> Result<LUDecomposition> {
        let mut lu = LUDecomposition::new(self)?;
        lu.execute(pivot_threshold)?;
        Ok(lu)
    }
}
