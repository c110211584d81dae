use crate::math::cubic_nd::cubic_point;
use crate::math::{PointN, TOLERANCE};

/// Default shrink factor applied to the search step size.
pub const DEFAULT_STEP_SCALE: f64 = 0.5;

/// Default number of stalled rounds after which the search terminates.
pub const DEFAULT_STALL_BUDGET: u32 = 6;

/// Tuning for the closest-point search along a segment's parameter axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefineParams {
    /// Factor the step size shrinks by whenever a round fails to improve.
    pub step_scale: f64,
    /// Number of non-improving rounds after which the search stops.
    pub stall_budget: u32,
}

impl Default for RefineParams {
    fn default() -> Self {
        Self {
            step_scale: DEFAULT_STEP_SCALE,
            stall_budget: DEFAULT_STALL_BUDGET,
        }
    }
}

/// A located point on one cubic segment.
#[derive(Debug, Clone, Copy)]
pub struct CurvePoint<const D: usize> {
    /// Parameter on the segment. Refinement may move it outside `[0, 1]`.
    pub u: f64,
    /// Curve position at `u`.
    pub point: PointN<D>,
    /// Squared distance from the query sample to `point`.
    pub distance_sq: f64,
}

/// Sharpens a chord-length parameter estimate into a local closest point.
///
/// Chord-length parameterization only approximates true arc-length
/// correspondence, so the naive parameter `u0` is biased wherever the
/// curve's speed varies. This runs a bidirectional line search along the
/// parameter axis: both `u ± step` probes are evaluated each round, a
/// strictly closer probe becomes the new best, and a round without
/// improvement halves the step. Only stalled rounds count toward the
/// budget, so a long run of successful strides never cuts the search
/// short.
///
/// `u_prev` and `u_next` are the chord parameters of the neighboring
/// samples; they bound the initial stride, and a missing neighbor (at a
/// span endpoint) contributes nothing. Probes are deliberately not clamped
/// to `[0, 1]`: near a knot the optimum can sit just past the segment
/// boundary, and the extrapolated evaluation is well defined.
///
/// The returned squared distance never exceeds the naive one.
#[must_use]
pub fn refine_closest_point<const D: usize>(
    ctrl: &[PointN<D>; 4],
    sample: &PointN<D>,
    u0: f64,
    u_prev: Option<f64>,
    u_next: Option<f64>,
    params: &RefineParams,
) -> CurvePoint<D> {
    let point = cubic_point(ctrl, u0);
    let mut best = CurvePoint {
        u: u0,
        point,
        distance_sq: (sample - point).norm_squared(),
    };

    let neighbor_span = u_prev.map_or(0.0, |u| (u0 - u).abs())
        + u_next.map_or(0.0, |u| (u - u0).abs());
    let mut step = neighbor_span / 2.0 * params.step_scale;
    if step < TOLERANCE {
        // Degenerate stride: the neighbors coincide with `u0`, so the
        // search cannot move.
        return best;
    }

    let mut stalled = 0;
    while stalled < params.stall_budget {
        let u_round = best.u;
        let mut improved = false;
        for u in [u_round + step, u_round - step] {
            let point = cubic_point(ctrl, u);
            let distance_sq = (sample - point).norm_squared();
            if distance_sq < best.distance_sq {
                best = CurvePoint {
                    u,
                    point,
                    distance_sq,
                };
                improved = true;
            }
        }
        if !improved {
            stalled += 1;
            step *= params.step_scale;
        }
    }

    best
}
