mod max_deviation;
mod refine;
mod validate_fit;

pub use max_deviation::{DeviationReport, MaxDeviation};
pub use refine::{
    refine_closest_point, CurvePoint, RefineParams, DEFAULT_STALL_BUDGET, DEFAULT_STEP_SCALE,
};
pub use validate_fit::{FitValidation, ValidateFit, TOLERANCE_OVERSHOOT};
