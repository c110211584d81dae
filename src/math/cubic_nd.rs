use super::PointN;

/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// `t` is unconstrained: values outside `[0, 1]` extrapolate along the
/// line through `a` and `b`.
#[must_use]
pub fn lerp<const D: usize>(a: &PointN<D>, b: &PointN<D>, t: f64) -> PointN<D> {
    a + (b - a) * t
}

/// Evaluates a cubic Bezier segment at parameter `u` using De Casteljau's
/// algorithm (three rounds of pairwise interpolation).
///
/// Control points are ordered start, start handle, end handle, end.
/// `u` may fall outside `[0, 1]`; the evaluation extrapolates the segment.
#[must_use]
pub fn cubic_point<const D: usize>(ctrl: &[PointN<D>; 4], u: f64) -> PointN<D> {
    let q0 = lerp(&ctrl[0], &ctrl[1], u);
    let q1 = lerp(&ctrl[1], &ctrl[2], u);
    let q2 = lerp(&ctrl[2], &ctrl[3], u);

    let r0 = lerp(&q0, &q1, u);
    let r1 = lerp(&q1, &q2, u);

    lerp(&r0, &r1, u)
}
