use std::ops::{Add, Mul, Sub, Neg};

use crate::errors::*;
use crate::operations;
use crate::{Matrix, Vector};

// Shape-checked binary operators return `Result<Matrix>` so mismatches surface as
// `DimensionMismatch` instead of a panic: `let c = (&a * &b)?;`

macro_rules! bin_inner {
    ($rhs:ty, $name:ident, $func:path) => {
        type Output = Result<Matrix>;

        fn $name(self, rhs: $rhs) -> Result<Matrix> {
            $func(&self, &rhs)
        }
    }
}
macro_rules! implement_bin {
    ($tr:ident, $name:ident, $func:path, $lhs:ty, $rhs:ty) => {
        impl $tr<$rhs> for $lhs {
            bin_inner!($rhs, $name, $func);
        }
    };
    ($tr:ident, $name:ident, $func:path, $lhs:ty, $rhs:ty, $( $lifetime:tt ),* ) => {
        impl<$($lifetime),*> $tr<$rhs> for $lhs {
            bin_inner!($rhs, $name, $func);
        }
    };
}

implement_bin!(Add, add, operations::add, Matrix, Matrix);
implement_bin!(Add, add, operations::add, Matrix, &'a Matrix, 'a);
implement_bin!(Add, add, operations::add, &'a Matrix, Matrix, 'a);
implement_bin!(Add, add, operations::add, &'a Matrix, &'b Matrix, 'a, 'b);

implement_bin!(Sub, sub, operations::sub, Matrix, Matrix);
implement_bin!(Sub, sub, operations::sub, Matrix, &'a Matrix, 'a);
implement_bin!(Sub, sub, operations::sub, &'a Matrix, Matrix, 'a);
implement_bin!(Sub, sub, operations::sub, &'a Matrix, &'b Matrix, 'a, 'b);

implement_bin!(Mul, mul, operations::multiply, Matrix, Matrix);
implement_bin!(Mul, mul, operations::multiply, Matrix, &'a Matrix, 'a);
implement_bin!(Mul, mul, operations::multiply, &'a Matrix, Matrix, 'a);
implement_bin!(Mul, mul, operations::multiply, &'a Matrix, &'b Matrix, 'a, 'b);

// negation
impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scaled(-1.0)
    }
}
impl<'b> Neg for &'b Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.scaled(-1.0)
    }
}

// scalar multiplication
impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self.scale(rhs);
        self
    }
}
impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix {
        self.scaled(rhs)
    }
}
impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, mut rhs: Matrix) -> Matrix {
        rhs.scale(self);
        rhs
    }
}
impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix {
        rhs.scaled(self)
    }
}

// matrix-vector product
impl<'a, 'b> Mul<&'b Vector> for &'a Matrix {
    type Output = Result<Vector>;

    fn mul(self, rhs: &'b Vector) -> Result<Vector> {
        self.apply(rhs)
    }
}
