use crate::error::{Result, SplineError};
use crate::math::PointN;

/// A knot on a piecewise cubic Bezier spline.
///
/// A knot is a position on the curve where two segments meet, together with
/// its incoming and outgoing tangent handles and the index of the sample it
/// was fitted at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot<const D: usize> {
    /// Handle controlling the tangent of the segment arriving at this knot.
    pub handle_in: PointN<D>,
    /// Position of the knot itself.
    pub position: PointN<D>,
    /// Handle controlling the tangent of the segment leaving this knot.
    pub handle_out: PointN<D>,
    /// Index into the original sample sequence this knot was fitted at.
    pub sample_index: usize,
}

impl<const D: usize> Knot<D> {
    /// Creates a new knot from its handle/position/handle triple.
    #[must_use]
    pub fn new(
        handle_in: PointN<D>,
        position: PointN<D>,
        handle_out: PointN<D>,
        sample_index: usize,
    ) -> Self {
        Self {
            handle_in,
            position,
            handle_out,
            sample_index,
        }
    }
}

/// Index span of the samples one segment was fitted from.
///
/// `start` and `end` are the sample indices of the segment's two knots,
/// both part of the segment for parameterization. For the wrap segment of
/// a cyclic spline `end < start` and index arithmetic wraps modulo the
/// sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpan {
    /// Sample index of the segment's start knot.
    pub start: usize,
    /// Sample index of the segment's end knot (inclusive).
    pub end: usize,
}

impl SampleSpan {
    /// Number of samples in the inclusive span, out of `total` samples.
    #[must_use]
    pub fn sample_count(&self, total: usize) -> usize {
        if self.end >= self.start {
            self.end - self.start + 1
        } else {
            (self.end + total) - self.start + 1
        }
    }

    /// Sample indices of the inclusive span in order, modulo `total`.
    pub fn indices(self, total: usize) -> impl Iterator<Item = usize> {
        let count = self.sample_count(total);
        (0..count).map(move |i| (self.start + i) % total)
    }
}

/// One cubic segment of a spline, with the sample span it was fitted from.
#[derive(Debug, Clone, Copy)]
pub struct Segment<const D: usize> {
    /// Bezier control points: start knot, its outgoing handle, the end
    /// knot's incoming handle, end knot.
    pub ctrl: [PointN<D>; 4],
    /// Originating sample span.
    pub span: SampleSpan,
}

/// A piecewise cubic Bezier spline fitted to a sample sequence.
///
/// Consecutive knot pairs define the cubic segments; a cyclic spline closes
/// with an extra segment from the last knot back to the first.
#[derive(Debug, Clone)]
pub struct CubicSpline<const D: usize> {
    knots: Vec<Knot<D>>,
    cyclic: bool,
}

impl<const D: usize> CubicSpline<D> {
    /// Creates a spline from its knot sequence.
    #[must_use]
    pub fn new(knots: Vec<Knot<D>>, cyclic: bool) -> Self {
        Self { knots, cyclic }
    }

    /// Returns the knot sequence.
    #[must_use]
    pub fn knots(&self) -> &[Knot<D>] {
        &self.knots
    }

    /// Returns whether the spline closes back onto its first knot.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Number of cubic segments (knot pairs, plus the wrap pair when cyclic).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        if self.knots.len() < 2 {
            0
        } else if self.cyclic {
            self.knots.len()
        } else {
            self.knots.len() - 1
        }
    }

    /// Iterates the cubic segments in knot order.
    ///
    /// The wrap segment of a cyclic spline comes last; its span wraps back
    /// to the first knot's sample index.
    pub fn segments(&self) -> impl Iterator<Item = Segment<D>> + '_ {
        (0..self.segment_count()).map(move |i| {
            let k0 = &self.knots[i];
            let k1 = &self.knots[(i + 1) % self.knots.len()];
            Segment {
                ctrl: [k0.position, k0.handle_out, k1.handle_in, k1.position],
                span: SampleSpan {
                    start: k0.sample_index,
                    end: k1.sample_index,
                },
            }
        })
    }

    /// Checks that the knot spans tile a sequence of `sample_count` samples.
    ///
    /// Knot sample indices must stay in bounds and must not decrease; an
    /// open spline must additionally anchor its first knot at sample `0` and
    /// its last knot at the final sample, so the spans cover the sequence
    /// with no gap or overlap.
    ///
    /// # Errors
    ///
    /// Returns a [`SplineError`] describing the first violation found.
    pub fn validate_against(&self, sample_count: usize) -> Result<()> {
        if sample_count == 0 {
            return Err(SplineError::NoSamples.into());
        }
        if self.knots.len() < 2 {
            return Err(SplineError::TooFewKnots(self.knots.len()).into());
        }

        for (i, knot) in self.knots.iter().enumerate() {
            if knot.sample_index >= sample_count {
                return Err(SplineError::SampleIndexOutOfBounds {
                    knot: i,
                    sample_index: knot.sample_index,
                    sample_count,
                }
                .into());
            }
        }

        for i in 1..self.knots.len() {
            let previous = self.knots[i - 1].sample_index;
            if self.knots[i].sample_index < previous {
                return Err(SplineError::KnotsOutOfOrder {
                    knot: i,
                    sample_index: self.knots[i].sample_index,
                    previous,
                }
                .into());
            }
        }

        if !self.cyclic {
            let first = self.knots[0].sample_index;
            if first != 0 {
                return Err(SplineError::LeadingGap(first).into());
            }
            let end = self.knots[self.knots.len() - 1].sample_index;
            if end != sample_count - 1 {
                return Err(SplineError::TrailingGap {
                    end,
                    expected: sample_count - 1,
                }
                .into());
            }
        }

        Ok(())
    }
}
