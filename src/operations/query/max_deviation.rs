use crate::error::Result;
use crate::geometry::{CubicSpline, Segment};
use crate::math::chord_nd::chord_parameters;
use crate::math::cubic_nd::cubic_point;
use crate::math::PointN;

use super::refine::{refine_closest_point, CurvePoint, RefineParams};

/// Measured deviation of a fitted spline from the samples it was fitted to.
#[derive(Debug, Clone)]
pub struct DeviationReport<const D: usize> {
    /// Worst-case Euclidean distance between a sample and its matched
    /// curve point. This is the scalar compared against the fit tolerance.
    pub max_deviation: f64,
    /// Indices of segments whose chord length was zero. Their samples were
    /// matched to the segment start and refinement was skipped.
    pub degenerate_segments: Vec<usize>,
    /// Indices of segments spanning fewer than two samples. They cannot be
    /// parameterized and contribute no error terms.
    pub empty_segments: Vec<usize>,
    /// Every (sample, matched curve point) pair, recorded only when
    /// requested. Diagnostic side channel for external rendering; it never
    /// affects `max_deviation`.
    pub pairs: Option<Vec<(PointN<D>, PointN<D>)>>,
}

/// Computes the maximum deviation between a sample polyline and the
/// piecewise cubic Bezier spline fitted to it.
///
/// Each segment's samples are assigned chord-length parameters, sharpened
/// by a local closest-point search (unless disabled), and the worst squared
/// deviation across all segments is folded into one scalar.
pub struct MaxDeviation<'a, const D: usize> {
    spline: &'a CubicSpline<D>,
    samples: &'a [PointN<D>],
    refine: Option<RefineParams>,
    record_pairs: bool,
}

impl<'a, const D: usize> MaxDeviation<'a, D> {
    /// Creates a new `MaxDeviation` query with default refinement.
    #[must_use]
    pub fn new(spline: &'a CubicSpline<D>, samples: &'a [PointN<D>]) -> Self {
        Self {
            spline,
            samples,
            refine: Some(RefineParams::default()),
            record_pairs: false,
        }
    }

    /// Overrides the closest-point refinement tuning.
    #[must_use]
    pub fn refine_params(mut self, params: RefineParams) -> Self {
        self.refine = Some(params);
        self
    }

    /// Disables closest-point refinement; chord-length estimates are used
    /// as-is.
    #[must_use]
    pub fn skip_refinement(mut self) -> Self {
        self.refine = None;
        self
    }

    /// Records every (sample, matched point) pair in the report.
    #[must_use]
    pub fn record_pairs(mut self) -> Self {
        self.record_pairs = true;
        self
    }

    /// Executes the query, returning the deviation report.
    ///
    /// Each sample is measured exactly once: a segment owns the half-open
    /// span `[start, end)` of its samples, boundary samples belong to the
    /// following segment, and the last measurable segment of an open spline
    /// keeps the terminal sample.
    ///
    /// # Errors
    ///
    /// Returns an error if the spline's knot spans do not tile the sample
    /// sequence (see [`CubicSpline::validate_against`]).
    pub fn execute(&self) -> Result<DeviationReport<D>> {
        self.spline.validate_against(self.samples.len())?;

        let total = self.samples.len();
        let mut max_sq = 0.0_f64;
        let mut degenerate_segments = Vec::new();
        let mut empty_segments = Vec::new();
        let mut pairs = self.record_pairs.then(|| Vec::with_capacity(total));

        // The terminal sample of an open spline belongs to the last segment
        // spanning at least two samples; a trailing empty segment cannot
        // claim it. Segment i runs between knots i and i + 1.
        let terminal_owner = if self.spline.is_cyclic() {
            None
        } else {
            let knots = self.spline.knots();
            (0..knots.len() - 1)
                .rev()
                .find(|&i| knots[i + 1].sample_index > knots[i].sample_index)
        };

        for (seg_index, segment) in self.spline.segments().enumerate() {
            let run: Vec<PointN<D>> = segment
                .span
                .indices(total)
                .map(|i| self.samples[i])
                .collect();
            if run.len() < 2 {
                empty_segments.push(seg_index);
                continue;
            }

            let params_u = chord_parameters(&run);
            if params_u.is_none() {
                degenerate_segments.push(seg_index);
            }

            let keep_terminal = terminal_owner == Some(seg_index);
            let measured = if keep_terminal { run.len() } else { run.len() - 1 };

            for (k, sample) in run.iter().enumerate().take(measured) {
                let matched = self.match_sample(&segment, &run, params_u.as_deref(), k);
                max_sq = max_sq.max(matched.distance_sq);
                if let Some(pairs) = pairs.as_mut() {
                    pairs.push((*sample, matched.point));
                }
            }
        }

        Ok(DeviationReport {
            max_deviation: max_sq.sqrt(),
            degenerate_segments,
            empty_segments,
            pairs,
        })
    }

    /// Matches the `k`-th sample of a segment run to its curve point.
    fn match_sample(
        &self,
        segment: &Segment<D>,
        run: &[PointN<D>],
        params_u: Option<&[f64]>,
        k: usize,
    ) -> CurvePoint<D> {
        let Some(u) = params_u else {
            // Zero chord length: every sample of the run is treated as
            // coincident with the segment start.
            let point = cubic_point(&segment.ctrl, 0.0);
            return CurvePoint {
                u: 0.0,
                point,
                distance_sq: (run[k] - point).norm_squared(),
            };
        };

        match &self.refine {
            Some(params) => refine_closest_point(
                &segment.ctrl,
                &run[k],
                u[k],
                (k > 0).then(|| u[k - 1]),
                (k + 1 < u.len()).then(|| u[k + 1]),
                params,
            ),
            None => {
                let point = cubic_point(&segment.ctrl, u[k]);
                CurvePoint {
                    u: u[k],
                    point,
                    distance_sq: (run[k] - point).norm_squared(),
                }
            }
        }
    }
}
