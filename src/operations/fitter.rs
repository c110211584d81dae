use crate::error::Result;
use crate::geometry::CubicSpline;
use crate::math::PointN;

/// Boundary to the external curve-fitting algorithm.
///
/// The measurement engine never fits curves itself; validation flows hand a
/// sample sequence to an implementation of this trait and then measure the
/// spline it returns. Any fitting algorithm may sit behind it as long as the
/// returned spline honors the knot/span data model of
/// [`CubicSpline`](crate::geometry::CubicSpline).
pub trait CurveFitter<const D: usize> {
    /// Fits a piecewise cubic Bezier spline to `samples`.
    ///
    /// `tolerance` is the maximum deviation the fit is allowed; a set
    /// `corner_angle` enables corner detection; `cyclic` requests a closed
    /// spline whose final segment wraps back to the first knot.
    ///
    /// # Errors
    ///
    /// Returns an error if no spline within the tolerance can be computed.
    fn fit(
        &self,
        samples: &[PointN<D>],
        tolerance: f64,
        corner_angle: Option<f64>,
        cyclic: bool,
    ) -> Result<CubicSpline<D>>;
}
