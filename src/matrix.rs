use std::f64;
use std::fmt;
use std::ops::{Index, IndexMut};

use approx::{AbsDiffEq, RelativeEq};
use rand::{self, Rand, Rng};
use rand::distributions::{IndependentSample, Normal};
use rand::distributions::normal::StandardNormal;

use crate::errors::*;
use crate::Vector;

/// Dense `nrows x ncols` grid of `f64` values, stored column-major.
///
/// A matrix always has at least one row and one column; every constructor that takes dimensions
/// checks this and fails with `InvalidConstruction` otherwise. There is no dimensionless
/// constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

fn check_dims(nrows: usize, ncols: usize) -> Result<()> {
    if nrows == 0 || ncols == 0 {
        return Err(invalid_construction(format!("matrix dimensions must be positive, got {}x{}",
            nrows, ncols)));
    }
    Ok(())
}

impl Matrix {
    /// Zero-filled `nrows x ncols` matrix.
    pub fn new(nrows: usize, ncols: usize) -> Result<Matrix> {
        Matrix::filled(nrows, ncols, 0.0)
    }
    pub fn filled(nrows: usize, ncols: usize, value: f64) -> Result<Matrix> {
        check_dims(nrows, ncols)?;
        Ok(Matrix {
            values: vec![value; nrows * ncols],
            rows: nrows,
            cols: ncols,
        })
    }
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Matrix> {
        Matrix::filled(nrows, ncols, 0.0)
    }
    pub fn ones(nrows: usize, ncols: usize) -> Result<Matrix> {
        Matrix::filled(nrows, ncols, 1.0)
    }
    /// Builds a matrix from column-major `data`.
    pub fn from_vec(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Matrix> {
        check_dims(nrows, ncols)?;
        if data.len() != nrows * ncols {
            return Err(invalid_construction(format!("{} values cannot fill a {}x{} matrix",
                data.len(), nrows, ncols)));
        }
        Ok(Matrix {
            values: data,
            rows: nrows,
            cols: ncols,
        })
    }
    pub fn from_fn<F>(nrows: usize, ncols: usize, f: F) -> Result<Matrix>
            where F: Fn(usize, usize) -> f64 {
        check_dims(nrows, ncols)?;
        let mut values = Vec::with_capacity(nrows * ncols);
        for c in 0..ncols {
            for r in 0..nrows {
                values.push(f(r, c));
            }
        }
        Ok(Matrix {
            values: values,
            rows: nrows,
            cols: ncols,
        })
    }
    /// Copies a row-major grid into a new matrix. The caller keeps its grid; later changes to it
    /// never show up in the matrix.
    pub fn from_rows(grid: &[Vec<f64>]) -> Result<Matrix> {
        let nrows = grid.len();
        let ncols = grid.first().map(|row| row.len()).unwrap_or(0);
        check_dims(nrows, ncols)?;
        if let Some(r) = grid.iter().position(|row| row.len() != ncols) {
            return Err(invalid_construction(format!(
                "row {} has {} entries, expected {}", r, grid[r].len(), ncols)));
        }
        Matrix::from_fn(nrows, ncols, |r, c| grid[r][c])
    }
    /// Consumes a row-major grid and re-lays its entries out column-major. The grid is moved in
    /// and dropped afterwards, so the caller is left with nothing that aliases the matrix. This
    /// is not zero-copy; use `from_vec` to adopt column-major storage without copying.
    pub fn from_grid(grid: Vec<Vec<f64>>) -> Result<Matrix> {
        Matrix::from_rows(&grid)
    }
    pub fn diag(diagonal: &[f64]) -> Result<Matrix> {
        let n = diagonal.len();
        Matrix::from_fn(n, n, |r, c| if r == c { diagonal[r] } else { 0.0 })
    }
    pub fn eye(n: usize) -> Result<Matrix> {
        Matrix::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 })
    }
    /// Entries drawn uniformly from `[0, 1)`.
    pub fn rand(nrows: usize, ncols: usize) -> Result<Matrix> {
        check_dims(nrows, ncols)?;
        let mut rng = rand::thread_rng();

        let mut v: Vec<f64> = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            v.push(rng.gen());
        }
        Matrix::from_vec(v, nrows, ncols)
    }
    /// Entries drawn from the standard normal distribution.
    pub fn randsn(nrows: usize, ncols: usize) -> Result<Matrix> {
        check_dims(nrows, ncols)?;
        let mut rng = rand::thread_rng();

        let mut v: Vec<f64> = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            v.push(StandardNormal::rand(&mut rng).0);
        }
        Matrix::from_vec(v, nrows, ncols)
    }
    pub fn randn(nrows: usize, ncols: usize, mean: f64, stdev: f64) -> Result<Matrix> {
        check_dims(nrows, ncols)?;
        if !(stdev >= 0.0) {
            return Err(invalid_construction(format!(
                "standard deviation must be non-negative, got {}", stdev)));
        }
        let mut rng = rand::thread_rng();
        let dist = Normal::new(mean, stdev);

        let mut v: Vec<f64> = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            v.push(dist.ind_sample(&mut rng));
        }
        Matrix::from_vec(v, nrows, ncols)
    }

    pub fn nrows(&self) -> usize { self.rows }
    pub fn ncols(&self) -> usize { self.cols }
    pub fn dims(&self) -> (usize, usize) { (self.rows, self.cols) }
    pub fn len(&self) -> usize { self.rows * self.cols }
    pub fn is_square(&self) -> bool { self.rows == self.cols }
    pub fn is_vector(&self) -> bool { self.rows == 1 || self.cols == 1 }

    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        self.check_index(r, c)?;
        Ok(self.values[self.offset(r, c)])
    }
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> Result<()> {
        self.check_index(r, c)?;
        let i = self.offset(r, c);
        self.values[i] = value;
        Ok(())
    }

    pub fn row(&self, r: usize) -> Result<Vector> {
        if r >= self.rows {
            return Err(index_out_of_range(format!("row {} in {}x{} matrix", r, self.rows,
                self.cols)));
        }
        Ok(Vector::from_vec((0..self.cols).map(|c| self[(r, c)]).collect()))
    }
    pub fn column(&self, c: usize) -> Result<Vector> {
        if c >= self.cols {
            return Err(index_out_of_range(format!("column {} in {}x{} matrix", c, self.rows,
                self.cols)));
        }
        Ok(Vector::from_vec(self.values[c * self.rows..(c + 1) * self.rows].to_vec()))
    }

    pub fn iter(&self) -> MatrixIter {
        MatrixIter {
            mat: self,
            current_loc: (0, 0),
        }
    }

    /// Swaps rows and columns in place. Square matrices are transposed without reallocating;
    /// other shapes get fresh storage with swapped dimensions.
    pub fn transpose(&mut self) {
        if self.is_square() {
            let n = self.rows;
            for r in 0..n {
                for c in (r + 1)..n {
                    self.values.swap(c * n + r, r * n + c);
                }
            }
        } else {
            let t = self.t();
            *self = t;
        }
    }
    /// Transposed copy.
    pub fn t(&self) -> Matrix {
        let (m, n) = self.dims();
        let mut values = Vec::with_capacity(m * n);
        for r in 0..m {
            for c in 0..n {
                values.push(self[(r, c)]);
            }
        }
        Matrix {
            values: values,
            rows: n,
            cols: m,
        }
    }

    /// Multiplies every entry by `k` in place.
    pub fn scale(&mut self, k: f64) {
        for v in self.values.iter_mut() {
            *v *= k;
        }
    }
    pub fn scaled(&self, k: f64) -> Matrix {
        let mut out = self.clone();
        out.scale(k);
        out
    }

    /// `true` if both matrices have the same dimensions and every pair of entries differs by at
    /// most `tolerance`.
    pub fn equals(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dims() == other.dims()
            && self.values.iter().zip(other.values.iter())
                .all(|(l, r)| (l - r).abs() <= tolerance)
    }

    /// Copy with one row and one column dropped. Callers guarantee both dimensions are at
    /// least 2 and the indices are in range.
    pub(crate) fn without(&self, row: usize, col: usize) -> Matrix {
        let mut values = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for c in (0..self.cols).filter(|&c| c != col) {
            for r in (0..self.rows).filter(|&r| r != row) {
                values.push(self[(r, c)]);
            }
        }
        Matrix {
            values: values,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            let (ia, ib) = (self.offset(a, c), self.offset(b, c));
            self.values.swap(ia, ib);
        }
    }

    fn check_index(&self, r: usize, c: usize) -> Result<()> {
        if r >= self.rows || c >= self.cols {
            return Err(index_out_of_range(format!("({}, {}) in {}x{} matrix", r, c, self.rows,
                self.cols)));
        }
        Ok(())
    }
    #[inline]
    fn offset(&self, r: usize, c: usize) -> usize {
        c * self.rows + r
    }
}

/// Unchecked element access; panics on out-of-range indices like slice indexing does. Use
/// `get`/`set` for checked access.
impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        assert!(r < self.rows && c < self.cols, "matrix index out of bounds");
        &self.values[c * self.rows + r]
    }
}
impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        assert!(r < self.rows && c < self.cols, "matrix index out of bounds");
        &mut self.values[c * self.rows + r]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                write!(f, "{:+1.5e} ", self[(i, j)])?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.dims() == other.dims()
            && self.values.iter().zip(other.values.iter())
                .all(|(l, r)| l.abs_diff_eq(r, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Matrix, epsilon: f64, max_relative: f64) -> bool {
        self.dims() == other.dims()
            && self.values.iter().zip(other.values.iter())
                .all(|(l, r)| l.relative_eq(r, epsilon, max_relative))
    }
}

/// Column-major iterator over the entries of a matrix.
pub struct MatrixIter<'a> {
    mat: &'a Matrix,
    current_loc: (usize, usize),
}
impl<'a> Iterator for MatrixIter<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.current_loc.1 >= self.mat.ncols() { return None }

        let val = self.mat[self.current_loc];

        self.current_loc.0 += 1;
        if self.current_loc.0 >= self.mat.nrows() {
            self.current_loc.0 = 0;
            self.current_loc.1 += 1;
        }
        Some(val)
    }
}
