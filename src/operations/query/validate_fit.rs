use crate::error::Result;
use crate::geometry::CubicSpline;
use crate::math::PointN;
use crate::operations::fitter::CurveFitter;

use super::max_deviation::{DeviationReport, MaxDeviation};
use super::refine::RefineParams;

/// Allowance for residual refinement imprecision when gating a fit: the
/// measured deviation may overshoot the requested tolerance by 1%.
pub const TOLERANCE_OVERSHOOT: f64 = 1.01;

/// Outcome of fitting a sample sequence and measuring the result.
#[derive(Debug, Clone)]
pub struct FitValidation<const D: usize> {
    /// The spline produced by the fitting collaborator.
    pub spline: CubicSpline<D>,
    /// The measured deviation report.
    pub report: DeviationReport<D>,
    /// Whether the measured maximum deviation stayed within the requested
    /// tolerance (including the overshoot allowance).
    pub within_tolerance: bool,
}

/// Fits a spline to a sample sequence and checks the fit against its own
/// tolerance.
///
/// This is the validation flow around the external fitting collaborator:
/// the fitter produces a spline, [`MaxDeviation`] measures it, and the
/// result is gated at `tolerance * TOLERANCE_OVERSHOOT`.
pub struct ValidateFit<'a, const D: usize> {
    samples: &'a [PointN<D>],
    tolerance: f64,
    corner_angle: Option<f64>,
    cyclic: bool,
    refine: RefineParams,
}

impl<'a, const D: usize> ValidateFit<'a, D> {
    /// Creates a new `ValidateFit` query.
    #[must_use]
    pub fn new(samples: &'a [PointN<D>], tolerance: f64) -> Self {
        Self {
            samples,
            tolerance,
            corner_angle: None,
            cyclic: false,
            refine: RefineParams::default(),
        }
    }

    /// Enables corner detection in the fitter at the given angle.
    #[must_use]
    pub fn corner_angle(mut self, angle: f64) -> Self {
        self.corner_angle = Some(angle);
        self
    }

    /// Requests a closed spline wrapping back onto its first knot.
    #[must_use]
    pub fn cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    /// Overrides the closest-point refinement tuning used for measurement.
    #[must_use]
    pub fn refine_params(mut self, params: RefineParams) -> Self {
        self.refine = params;
        self
    }

    /// Executes the query: fit, measure, gate.
    ///
    /// # Errors
    ///
    /// Returns an error if the fitter fails or the returned spline does not
    /// tile the sample sequence.
    pub fn execute<F: CurveFitter<D>>(&self, fitter: &F) -> Result<FitValidation<D>> {
        let spline = fitter.fit(self.samples, self.tolerance, self.corner_angle, self.cyclic)?;
        let report = MaxDeviation::new(&spline, self.samples)
            .refine_params(self.refine)
            .execute()?;
        let within_tolerance = report.max_deviation <= self.tolerance * TOLERANCE_OVERSHOOT;
        Ok(FitValidation {
            spline,
            report,
            within_tolerance,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FitError;
    use crate::geometry::Knot;
    use crate::math::cubic_nd::lerp;

    /// Stand-in for the external fitting algorithm: one straight segment
    /// from the first to the last sample, handles on the chord thirds.
    struct ChordFitter;

    impl CurveFitter<2> for ChordFitter {
        fn fit(
            &self,
            samples: &[PointN<2>],
            _tolerance: f64,
            _corner_angle: Option<f64>,
            _cyclic: bool,
        ) -> Result<CubicSpline<2>> {
            let first = samples[0];
            let last = samples[samples.len() - 1];
            let knots = vec![
                Knot::new(first, first, lerp(&first, &last, 1.0 / 3.0), 0),
                Knot::new(lerp(&first, &last, 2.0 / 3.0), last, last, samples.len() - 1),
            ];
            Ok(CubicSpline::new(knots, false))
        }
    }

    /// A fitter that always reports failure.
    struct FailingFitter;

    impl CurveFitter<2> for FailingFitter {
        fn fit(
            &self,
            _samples: &[PointN<2>],
            _tolerance: f64,
            _corner_angle: Option<f64>,
            _cyclic: bool,
        ) -> Result<CubicSpline<2>> {
            Err(FitError::Failed("no convergence".to_owned()).into())
        }
    }

    #[test]
    fn good_fit_passes_the_gate() {
        // Samples on a straight line: the chord fitter reproduces them
        // exactly, so any positive tolerance passes.
        let samples = [
            PointN::<2>::new(0.0, 0.0),
            PointN::<2>::new(1.0, 0.0),
            PointN::<2>::new(2.0, 0.0),
        ];
        let outcome = ValidateFit::new(&samples, 1e-6)
            .execute(&ChordFitter)
            .unwrap();

        assert!(outcome.within_tolerance);
        assert!(outcome.report.max_deviation < 1e-9);
        assert_eq!(outcome.spline.knots().len(), 2);
    }

    #[test]
    fn poor_fit_fails_the_gate() {
        // The middle sample sits 0.5 off the chord; a 0.01 tolerance
        // cannot absorb that even with the 1% allowance.
        let samples = [
            PointN::<2>::new(0.0, 0.0),
            PointN::<2>::new(1.0, 0.5),
            PointN::<2>::new(2.0, 0.0),
        ];
        let outcome = ValidateFit::new(&samples, 0.01)
            .execute(&ChordFitter)
            .unwrap();

        assert!(!outcome.within_tolerance);
        assert!(outcome.report.max_deviation > 0.01 * TOLERANCE_OVERSHOOT);
    }

    #[test]
    fn overshoot_allowance_is_applied() {
        // The measured deviation is 0.1, which lands between the requested
        // tolerance and tolerance * 1.01: the gate must still pass.
        let samples = [
            PointN::<2>::new(0.0, 0.0),
            PointN::<2>::new(1.0, 0.1),
            PointN::<2>::new(2.0, 0.0),
        ];
        let outcome = ValidateFit::new(&samples, 0.0995)
            .execute(&ChordFitter)
            .unwrap();
        assert!(outcome.report.max_deviation > 0.0995);
        assert!(outcome.within_tolerance);
    }

    #[test]
    fn fitter_failure_propagates() {
        let samples = [PointN::<2>::new(0.0, 0.0), PointN::<2>::new(1.0, 0.0)];
        let err = ValidateFit::new(&samples, 0.01).execute(&FailingFitter);
        assert!(err.is_err());
    }
}
