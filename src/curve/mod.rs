//! Calibration curves that map root-motion distance to clip time.

mod calibration;
mod clip;

pub use calibration::{sample_time, CalibrationCurve, CurveKey};
pub use clip::AnimClip;
