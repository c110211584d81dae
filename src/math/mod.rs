pub mod chord_nd;
pub mod cubic_nd;

/// N-dimensional sample point.
pub type PointN<const D: usize> = nalgebra::Point<f64, D>;

/// N-dimensional vector.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
