error_chain! {
    errors {
        DimensionMismatch(s: String) {
            description("Dimension mismatch")
            display("Dimension mismatch: {}", s)
        }
        IllegalOperation(s: String) {
            description("Illegal operation")
            display("Illegal operation: {}", s)
        }
        IndexOutOfRange(s: String) {
            description("Index out of range")
            display("Index out of range: {}", s)
        }
        SingularMatrix(s: String) {
            description("Singular matrix")
            display("Singular matrix: {}", s)
        }
        InvalidConstruction(s: String) {
            description("Invalid construction")
            display("Invalid construction: {}", s)
        }
    }
}

pub fn dimension_mismatch<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::DimensionMismatch(s.into()))
}
pub fn illegal_operation<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::IllegalOperation(s.into()))
}
pub fn index_out_of_range<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::IndexOutOfRange(s.into()))
}
pub fn singular_matrix<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::SingularMatrix(s.into()))
}
pub fn invalid_construction<S: Into<String>>(s: S) -> Error {
    Error::from_kind(ErrorKind::InvalidConstruction(s.into()))
}
