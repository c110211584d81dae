use super::{PointN, TOLERANCE};

/// Normalized chord-length parameters for a run of samples.
///
/// Each sample is assigned its cumulative straight-line distance from the
/// first sample, divided by the total, so the returned sequence runs from
/// `0.0` to `1.0` and is monotone non-decreasing (coincident samples repeat
/// their parameter).
///
/// Returns `None` when the run holds fewer than two samples or its total
/// chord length is zero (below [`TOLERANCE`]); normalization is undefined
/// in either case and the caller decides the fallback, no division takes
/// place here.
#[must_use]
pub fn chord_parameters<const D: usize>(points: &[PointN<D>]) -> Option<Vec<f64>> {
    if points.len() < 2 {
        return None;
    }

    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0);
    let mut total = 0.0;
    for pair in points.windows(2) {
        total += (pair[1] - pair[0]).norm();
        cumulative.push(total);
    }

    if total < TOLERANCE {
        return None;
    }

    for value in &mut cumulative {
        *value /= total;
    }
    Some(cumulative)
}
