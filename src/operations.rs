//! Free functions for building and combining matrices.
//!
//! Every function validates shapes up front and allocates a fresh result, except
//! `make_identity`, which overwrites its argument.

use crate::errors::*;
use crate::{Matrix, Vector};

/// `n x n` identity matrix.
pub fn identity(n: usize) -> Result<Matrix> {
    Matrix::eye(n)
}

/// Identity matrix with the same dimension as the square matrix `a`.
pub fn identity_like(a: &Matrix) -> Result<Matrix> {
    check_square(a)?;
    Matrix::eye(a.nrows())
}

/// Overwrites `a` with the identity. Fails `DimensionMismatch` without touching `a` if it is not
/// square.
pub fn make_identity(a: &mut Matrix) -> Result<()> {
    check_square(a)?;
    for r in 0..a.nrows() {
        for c in 0..a.ncols() {
            a[(r, c)] = if r == c { 1.0 } else { 0.0 };
        }
    }
    Ok(())
}

pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_dims(a, b, "add")?;
    Matrix::from_fn(a.nrows(), a.ncols(), |r, c| a[(r, c)] + b[(r, c)])
}

pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_dims(a, b, "subtract")?;
    Matrix::from_fn(a.nrows(), a.ncols(), |r, c| a[(r, c)] - b[(r, c)])
}

/// Standard matrix product `a * b`, of dimensions `a.nrows() x b.ncols()`.
///
/// # Errors
/// `DimensionMismatch` unless `a.ncols() == b.nrows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(dimension_mismatch(format!("cannot multiply {}x{} by {}x{}", a.nrows(),
            a.ncols(), b.nrows(), b.ncols())));
    }
    let k = a.ncols();
    Matrix::from_fn(a.nrows(), b.ncols(),
        |r, c| (0..k).fold(0.0, |acc, s| acc + a[(r, s)] * b[(s, c)]))
}

fn check_square(a: &Matrix) -> Result<()> {
    if !a.is_square() {
        return Err(dimension_mismatch(format!("expected a square matrix, got {}x{}",
            a.nrows(), a.ncols())));
    }
    Ok(())
}

fn check_same_dims(a: &Matrix, b: &Matrix, op: &str) -> Result<()> {
    if a.dims() != b.dims() {
        return Err(dimension_mismatch(format!("cannot {} {}x{} and {}x{}", op, a.nrows(),
            a.ncols(), b.nrows(), b.ncols())));
    }
    Ok(())
}

impl Matrix {
    /// `self * other`; see [`multiply`](fn.multiply.html).
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        multiply(self, other)
    }

    /// Treats `v` as a column and returns the `nrows x 1` product.
    pub fn multiply_vector(&self, v: &Vector) -> Result<Matrix> {
        if self.ncols() != v.size() {
            return Err(dimension_mismatch(format!("cannot multiply {}x{} by vector of size {}",
                self.nrows(), self.ncols(), v.size())));
        }
        let x = v.as_slice();
        Matrix::from_fn(self.nrows(), 1,
            |r, _| x.iter().enumerate().fold(0.0, |acc, (s, xs)| acc + self[(r, s)] * xs))
    }

    /// Like `multiply_vector`, but hands the product back as a `Vector`.
    pub fn apply(&self, v: &Vector) -> Result<Vector> {
        self.multiply_vector(v).map(|col| Vector::from_vec(col.iter().collect()))
    }
}
