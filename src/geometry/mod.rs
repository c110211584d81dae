pub mod spline;

pub use spline::{CubicSpline, Knot, SampleSpan, Segment};
