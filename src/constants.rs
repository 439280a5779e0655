/// absolute tolerance used when comparing matrices and vectors entrywise
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
/// smallest acceptable magnitude of an LU pivot when no threshold is given
pub const DEFAULT_PIVOT_THRESHOLD: f64 = 1e-12;
/// pivot magnitude under which Gauss-Jordan inversion treats the determinant as zero
pub const SINGULARITY_EPSILON: f64 = 1e-12;
