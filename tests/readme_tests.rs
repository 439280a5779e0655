// Set of tests that should mirror the examples in README

#[macro_use] extern crate fnum;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use fnum::{Compose, LUDecompose, Matrix, Solve, Vector};
use fnum::errors::ErrorKind;
use fnum::operations;

#[test]
fn test_creation() {
    let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
    assert_eq!(a.dims(), (3, 4));

    // the vector in from_vec assumes column-major order
    let b = Matrix::from_vec(vec![1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0],
        3, 4).unwrap();
    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());

    let c = Matrix::from_rows(&[vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0],
        vec![9.0, 10.0, 11.0, 12.0]]).unwrap();
    assert_eq!(a, c);
}

#[test]
fn test_ones_zeros() {
    let a = Matrix::ones(5, 4).unwrap();
    assert_eq!(a.dims(), (5, 4));
    assert_eq!(a.get(0, 0).unwrap(), 1.0);
    assert_eq!(a.get(0, 3).unwrap(), 1.0);
    assert_eq!(a.get(4, 2).unwrap(), 1.0);

    match *Matrix::zeros(0, 3).unwrap_err().kind() {
        ErrorKind::InvalidConstruction(_) => {}
        ref k => panic!("expected InvalidConstruction, found: {}", k),
    }
}

#[test]
fn test_ops() {
    let a = Matrix::ones(2, 2).unwrap();
    let b = Matrix::ones(2, 2).unwrap();
    let c = (&a + &b).unwrap();
    assert_eq!(c.dims(), (2, 2));
    assert_eq!(c.get(0, 0).unwrap(), 2.0);

    let d = (&c * Matrix::zeros(2, 2).unwrap()).unwrap();
    assert_eq!(d.dims(), (2, 2));
    assert_eq!(d.get(0, 0).unwrap(), 0.0);

    let e = operations::multiply(&c, &operations::identity(2).unwrap()).unwrap();
    assert_eq!(e, c);
    assert!((&a * &Matrix::ones(3, 2).unwrap()).is_err());
}

#[test]
fn test_determinant() {
    let a = mat![6, 1, 1; 4, -2, 5; 2, 8, 7];
    assert_relative_eq!(a.determinant().unwrap(), -306.0, max_relative = 1e-12);
}

#[test]
fn test_lu() {
    let a = mat![4, 3; 6, 3];
    let lu = a.lu(1e-12).unwrap();
    assert_abs_diff_eq!(*lu.l().unwrap(), mat![1, 0; 1.5, 1], epsilon = 1e-12);
    assert_abs_diff_eq!(*lu.r().unwrap(), mat![4, 3; 0, -1.5], epsilon = 1e-12);
    assert_abs_diff_eq!(lu.determinant().unwrap(), -6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(lu.compose().unwrap(), a, epsilon = 1e-12);
}

#[test]
fn test_solve() {
    let a = mat![3, 1; 1, 2];
    let b = Vector::xy(9.0, 8.0);
    let x = a.solve(&b).unwrap();
    assert_abs_diff_eq!(x, Vector::xy(2.0, 3.0), epsilon = 1e-9);

    match *mat![1, 2; 2, 4].solve(&b).unwrap_err().kind() {
        ErrorKind::SingularMatrix(_) => {}
        ref k => panic!("expected SingularMatrix, found: {}", k),
    }
}

#[test]
fn test_inverse() {
    let a = mat![4, 7; 2, 6];
    let a_inv = a.inverted().unwrap();
    let prod = (&a * &a_inv).unwrap();
    assert!(prod.equals(&Matrix::eye(2).unwrap(), 1e-12));
}
