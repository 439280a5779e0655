//! Dense real-valued linear algebra: `Matrix` and `Vector` values, a cofactor determinant,
//! LU decomposition without pivoting, and linear-system solving by forward and backward
//! substitution.
//!
//! ```
//! #[macro_use] extern crate fnum;
//! use fnum::{LUDecompose, Vector};
//!
//! # fn main() {
//! let a = mat![3, 1; 1, 2];
//! let lu = a.lu(1e-12).unwrap();
//! let x = lu.solve(&Vector::xy(9.0, 8.0)).unwrap();
//! assert!(x.equals(&Vector::xy(2.0, 3.0), 1e-9));
//! # }
//! ```

extern crate approx;
extern crate num;
extern crate rand;
#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;

#[macro_use] mod macro_def;

pub mod errors;
pub mod constants;

mod vector;
pub use vector::Vector;

mod matrix;
pub use matrix::{Matrix, MatrixIter};

mod det;
mod ops;
pub mod operations;

pub mod decompose;
pub use decompose::{Compose, LUDecompose, LUDecomposition, State};

pub mod solve;
pub use solve::Solve;
