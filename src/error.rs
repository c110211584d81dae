use thiserror::Error;

/// Top-level error type for the fitgauge measurement engine.
#[derive(Debug, Error)]
pub enum FitgaugeError {
    #[error(transparent)]
    Spline(#[from] SplineError),

    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Errors describing a spline that cannot be measured against its samples.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error("spline has {0} knots, at least 2 are required")]
    TooFewKnots(usize),

    #[error("sample sequence is empty")]
    NoSamples,

    #[error("knot {knot} references sample {sample_index}, but only {sample_count} samples exist")]
    SampleIndexOutOfBounds {
        knot: usize,
        sample_index: usize,
        sample_count: usize,
    },

    #[error("knot {knot} at sample {sample_index} precedes its predecessor at sample {previous}")]
    KnotsOutOfOrder {
        knot: usize,
        sample_index: usize,
        previous: usize,
    },

    #[error("open spline starts at sample {0}, leaving earlier samples unmeasured")]
    LeadingGap(usize),

    #[error("open spline ends at sample {end}, expected the final sample {expected}")]
    TrailingGap { end: usize, expected: usize },
}

/// Errors reported by the external curve-fitting collaborator.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("curve fitting failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`FitgaugeError`].
pub type Result<T> = std::result::Result<T, FitgaugeError>;
