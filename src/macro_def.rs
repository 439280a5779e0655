// Example:
// let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
// assert_eq!(a.dims(), (3, 4));
//
// Panics if a row is empty or the rows differ in length.
#[macro_export]
macro_rules! mat {
    [$( $( $x:expr ),* );*] => {{
        let rows: Vec<Vec<f64>> = vec![$( vec![$( $x as f64 ),*] ),*];
        $crate::Matrix::from_grid(rows).expect("mat!: rows must be non-empty and of equal length")
    }}
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    #[test]
    fn test_macro() {
        let a = mat![1, 2, 3, 4; 5, 6, 7, 8];
        assert_eq!(a.dims(), (2, 4));

        assert_eq!(a.get(0, 0).unwrap(), 1.0);
        assert_eq!(a.get(0, 1).unwrap(), 2.0);
        assert_eq!(a.get(0, 2).unwrap(), 3.0);
        assert_eq!(a.get(0, 3).unwrap(), 4.0);
        assert_eq!(a.get(1, 0).unwrap(), 5.0);
        assert_eq!(a.get(1, 1).unwrap(), 6.0);
        assert_eq!(a.get(1, 2).unwrap(), 7.0);
        assert_eq!(a.get(1, 3).unwrap(), 8.0);

        let a = mat![1, 2; 3.0, 4; 5.5, 6];
        assert_eq!(a.dims(), (3, 2));

        assert_eq!(a.get(0, 0).unwrap(), 1.0);
        assert_eq!(a.get(0, 1).unwrap(), 2.0);
        assert_eq!(a.get(1, 0).unwrap(), 3.0);
        assert_eq!(a.get(1, 1).unwrap(), 4.0);
        assert_eq!(a.get(2, 0).unwrap(), 5.5);
        assert_eq!(a.get(2, 1).unwrap(), 6.0);

        let column = mat![1; -2; 3];
        assert_eq!(column.dims(), (3, 1));
        assert_eq!(column, Matrix::from_vec(vec![1.0, -2.0, 3.0], 3, 1).unwrap());
    }

    #[test]
    #[should_panic(expected = "mat!")]
    fn test_macro_ragged() {
        mat![1, 2; 3];
    }
}
