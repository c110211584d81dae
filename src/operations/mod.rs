pub mod fitter;
pub mod query;

pub use fitter::CurveFitter;
