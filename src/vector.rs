use std::f64;
use std::fmt;
use std::slice;

use approx::{AbsDiffEq, RelativeEq};

use crate::errors::*;

/// Fixed-length, ordered sequence of `f64` values.
///
/// The length is decided at construction and never changes; `scale` and `add` mutate entries in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    pub fn from_vec(values: Vec<f64>) -> Vector {
        Vector { values: values }
    }
    pub fn zeros(size: usize) -> Vector {
        Vector { values: vec![0.0; size] }
    }
    pub fn xy(x: f64, y: f64) -> Vector {
        Vector { values: vec![x, y] }
    }
    pub fn xyz(x: f64, y: f64, z: f64) -> Vector {
        Vector { values: vec![x, y, z] }
    }

    pub fn size(&self) -> usize { self.values.len() }

    pub fn get(&self, i: usize) -> Result<f64> {
        self.values.get(i).map(|&f| f)
            .ok_or_else(|| index_out_of_range(format!("index {} in vector of size {}", i,
                self.size())))
    }
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        let size = self.size();
        match self.values.get_mut(i) {
            Some(v) => { *v = value; Ok(()) }
            None    => Err(index_out_of_range(format!("index {} in vector of size {}", i, size))),
        }
    }

    pub fn x(&self) -> Result<f64> { self.get(0) }
    pub fn y(&self) -> Result<f64> { self.get(1) }
    pub fn z(&self) -> Result<f64> { self.get(2) }

    pub fn as_slice(&self) -> &[f64] { &self.values[..] }
    pub fn iter(&self) -> slice::Iter<f64> { self.values.iter() }
    pub fn into_vec(self) -> Vec<f64> { self.values }

    /// Multiplies every entry by `k` in place.
    pub fn scale(&mut self, k: f64) {
        for v in self.values.iter_mut() {
            *v *= k;
        }
    }
    pub fn scaled(&self, k: f64) -> Vector {
        let mut out = self.clone();
        out.scale(k);
        out
    }

    /// Adds `other` entrywise in place. Vectors of different sizes are rejected before any entry
    /// is touched.
    pub fn add(&mut self, other: &Vector) -> Result<()> {
        self.check_same_size(other)?;
        for (l, r) in self.values.iter_mut().zip(other.values.iter()) {
            *l += *r;
        }
        Ok(())
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_size(other)?;
        Ok(self.iter().zip(other.iter()).map(|(l, r)| l * r).fold(0.0, |acc, f| acc + f))
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.iter().fold(0.0, |acc, f| acc + f * f).sqrt()
    }

    /// `true` if both vectors have the same size and every pair of entries differs by at most
    /// `tolerance`.
    pub fn equals(&self, other: &Vector, tolerance: f64) -> bool {
        self.size() == other.size()
            && self.iter().zip(other.iter()).all(|(l, r)| (l - r).abs() <= tolerance)
    }

    fn check_same_size(&self, other: &Vector) -> Result<()> {
        if self.size() != other.size() {
            return Err(dimension_mismatch(format!("vector sizes differ ({} vs {})", self.size(),
                other.size())));
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Vector {
        Vector::from_vec(values)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:+1.5e}", v)?;
        }
        write!(f, "]")
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Vector, epsilon: f64) -> bool {
        self.size() == other.size()
            && self.iter().zip(other.iter()).all(|(l, r)| l.abs_diff_eq(r, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Vector, epsilon: f64, max_relative: f64) -> bool {
        self.size() == other.size()
            && self.iter().zip(other.iter())
                .all(|(l, r)| l.relative_eq(r, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = Vector::zeros(4);
        assert_eq!(v.size(), 4);
        assert!(v.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_get_set() {
        let mut v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.get(1).unwrap(), 2.0);
        v.set(1, 5.0).unwrap();
        assert_eq!(v.get(1).unwrap(), 5.0);

        match *v.get(3).unwrap_err().kind() {
            ErrorKind::IndexOutOfRange(_) => {}
            ref k => panic!("expected IndexOutOfRange, found: {}", k),
        }
        assert!(v.set(7, 1.0).is_err());
        assert_eq!(v.as_slice(), &[1.0, 5.0, 3.0]);
    }

    #[test]
    fn test_scale() {
        let mut v = Vector::from_vec(vec![1.0, -2.0, 3.0]);
        v.scale(2.0);
        assert_eq!(v.as_slice(), &[2.0, -4.0, 6.0]);

        let w = v.scaled(0.5);
        assert_eq!(w.as_slice(), &[1.0, -2.0, 3.0]);
        assert_eq!(v.as_slice(), &[2.0, -4.0, 6.0]);
    }

    #[test]
    fn test_add() {
        let mut v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let w = Vector::from_vec(vec![10.0, 20.0, 30.0]);
        v.add(&w).unwrap();
        assert_eq!(v.as_slice(), &[11.0, 22.0, 33.0]);
    }

    #[test]
    fn test_add_mismatch_leaves_input() {
        let mut v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let w = Vector::from_vec(vec![10.0, 20.0]);
        match *v.add(&w).unwrap_err().kind() {
            ErrorKind::DimensionMismatch(_) => {}
            ref k => panic!("expected DimensionMismatch, found: {}", k),
        }
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_dot() {
        let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        let w = Vector::from_vec(vec![4.0, -5.0, 6.0]);
        assert_eq!(v.dot(&w).unwrap(), 4.0 - 10.0 + 18.0);
        assert!(v.dot(&Vector::zeros(2)).is_err());
    }

    #[test]
    fn test_norm() {
        assert_eq!(Vector::xy(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn test_components() {
        let p = Vector::xyz(1.0, 2.0, 3.0);
        assert_eq!(p.x().unwrap(), 1.0);
        assert_eq!(p.y().unwrap(), 2.0);
        assert_eq!(p.z().unwrap(), 3.0);

        let q = Vector::xy(1.0, 2.0);
        assert_eq!(q.size(), 2);
        assert!(q.z().is_err());
    }

    #[test]
    fn test_equals() {
        let v = Vector::from_vec(vec![1.0, 2.0]);
        let w = Vector::from_vec(vec![1.0 + 1e-10, 2.0 - 1e-10]);
        assert!(v.equals(&w, 1e-9));
        assert!(w.equals(&v, 1e-9));
        assert!(v.equals(&v, 0.0));
        assert!(!v.equals(&w, 1e-11));
        assert!(!v.equals(&Vector::zeros(3), 1e6));
    }

    #[test]
    fn test_display() {
        let v = Vector::xy(1.0, -2.0);
        assert_eq!(format!("{}", v), "[+1.00000e0 -2.00000e0]");
    }
}
