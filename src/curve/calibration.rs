use crate::error::{Error, Result};
use crate::sim::{lerp, physics};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One sample of a clip's root-motion distance and the time it is reached.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub value: f32,
    pub time: f32,
}

impl CurveKey {
    pub const fn new(value: f32, time: f32) -> Self {
        Self { value, time }
    }
}

/// Distance-to-time mapping authored for an animation clip.
///
/// Keys must be sorted by strictly increasing `value`. That is checked once
/// with [`CalibrationCurve::validate`] when the curve is loaded; sampling
/// assumes it and does not re-check.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalibrationCurve {
    pub name: String,
    pub keys: Vec<CurveKey>,
}

impl CalibrationCurve {
    pub fn new(name: impl Into<String>, keys: Vec<CurveKey>) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }

    pub fn from_pairs(name: impl Into<String>, pairs: &[(f32, f32)]) -> Self {
        Self::new(
            name,
            pairs
                .iter()
                .map(|&(value, time)| CurveKey::new(value, time))
                .collect(),
        )
    }

    pub fn sample_time(&self, distance: f32) -> f32 {
        sample_time(&self.keys, distance)
    }

    pub fn validate(&self) -> Result<()> {
        if self.keys.len() < 2 {
            return Err(Error::CurveTooShort {
                name: self.name.clone(),
                keys: self.keys.len(),
            });
        }

        for (index, pair) in self.keys.windows(2).enumerate() {
            let (prev, key) = (pair[0].value, pair[1].value);
            if key == prev {
                return Err(Error::CurveDuplicateValue {
                    name: self.name.clone(),
                    index: index + 1,
                });
            }
            // Also rejects NaN.
            if key.partial_cmp(&prev) != Some(Ordering::Greater) {
                return Err(Error::CurveNotSorted {
                    name: self.name.clone(),
                    index: index + 1,
                });
            }
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Inverts a calibration curve: returns the time at which `distance` is reached.
///
/// Finds the first key at or past `distance` (searching from the second key)
/// and interpolates from its predecessor. Distances outside the curve
/// extrapolate along the first or last segment rather than clamping.
/// Fewer than two keys yields `0.0`.
pub fn sample_time(keys: &[CurveKey], distance: f32) -> f32 {
    if keys.len() < 2 {
        return 0.0;
    }

    let i = (1 + keys[1..].partition_point(|key| distance > key.value)).min(keys.len() - 1);

    let a = keys[i - 1];
    let b = keys[i];
    let diff = b.value - a.value;
    let alpha = if physics::is_nearly_zero(diff) {
        0.0
    } else {
        (distance - a.value) / diff
    };
    lerp(a.time, b.time, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-4;

    fn start_curve() -> CalibrationCurve {
        CalibrationCurve::from_pairs("Distance", &[(0.0, 0.0), (10.0, 1.0), (20.0, 3.0)])
    }

    #[test]
    fn sample_interpolates_first_segment() {
        assert_relative_eq!(start_curve().sample_time(5.0), 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn sample_interpolates_second_segment() {
        assert_relative_eq!(start_curve().sample_time(15.0), 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn sample_exactly_on_keys() {
        let curve = start_curve();
        assert_relative_eq!(curve.sample_time(0.0), 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(curve.sample_time(10.0), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(curve.sample_time(20.0), 3.0, epsilon = TOLERANCE);
    }

    #[test]
    fn sample_past_end_extrapolates_last_slope() {
        assert_relative_eq!(start_curve().sample_time(25.0), 4.0, epsilon = TOLERANCE);
    }

    #[test]
    fn sample_before_start_extrapolates_first_slope() {
        assert_relative_eq!(start_curve().sample_time(-5.0), -0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn sample_single_key_returns_zero() {
        let curve = CalibrationCurve::from_pairs("Distance", &[(10.0, 2.0)]);
        for distance in [-100.0, 0.0, 10.0, 100.0] {
            assert_eq!(curve.sample_time(distance), 0.0);
        }
    }

    #[test]
    fn sample_empty_returns_zero() {
        assert_eq!(sample_time(&[], 3.0), 0.0);
    }

    #[test]
    fn sample_is_monotonic_inside_range() {
        let curve = CalibrationCurve::from_pairs(
            "Distance",
            &[
                (-200.0, 0.0),
                (-120.0, 0.2),
                (-40.0, 0.5),
                (0.0, 0.9),
                (1.0, 0.9),
            ],
        );
        let mut previous = curve.sample_time(-200.0);
        let mut distance = -200.0;
        while distance <= 1.0 {
            let time = curve.sample_time(distance);
            assert!(time + TOLERANCE >= previous, "time went back at {distance}");
            previous = time;
            distance += 0.5;
        }
    }

    #[test]
    fn sample_finds_segment_in_long_curve() {
        let pairs: Vec<(f32, f32)> = (0..64).map(|i| (i as f32 * 10.0, i as f32)).collect();
        let curve = CalibrationCurve::from_pairs("Distance", &pairs);
        assert_relative_eq!(curve.sample_time(415.0), 41.5, epsilon = TOLERANCE);
        assert_relative_eq!(curve.sample_time(5.0), 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(curve.sample_time(625.0), 62.5, epsilon = TOLERANCE);
    }

    #[test]
    fn sample_duplicate_values_do_not_divide_by_zero() {
        let curve = CalibrationCurve::from_pairs("Distance", &[(0.0, 0.0), (0.0, 1.0)]);
        assert_eq!(curve.sample_time(0.0), 0.0);
        assert!(curve.sample_time(5.0).is_finite());
    }

    #[test]
    fn validate_accepts_sorted_unique_curve() {
        assert!(start_curve().validate().is_ok());
    }

    #[test]
    fn validate_rejects_short_curve() {
        let curve = CalibrationCurve::from_pairs("Stop", &[(0.0, 0.0)]);
        assert!(matches!(
            curve.validate(),
            Err(Error::CurveTooShort { keys: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_unsorted_curve() {
        let curve = CalibrationCurve::from_pairs("Stop", &[(0.0, 0.0), (10.0, 1.0), (5.0, 2.0)]);
        assert!(matches!(
            curve.validate(),
            Err(Error::CurveNotSorted { index: 2, .. })
        ));
        assert!(!curve.is_valid());
    }

    #[test]
    fn validate_rejects_duplicate_value() {
        let curve = CalibrationCurve::from_pairs("Stop", &[(0.0, 0.0), (0.0, 1.0)]);
        assert!(matches!(
            curve.validate(),
            Err(Error::CurveDuplicateValue { index: 1, .. })
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let curve = CalibrationCurve::from_pairs("Stop", &[(0.0, 0.0), (f32::NAN, 1.0)]);
        assert!(!curve.is_valid());
    }

    #[test]
    fn validate_error_names_curve() {
        let curve = CalibrationCurve::from_pairs("Jog_Stop", &[]);
        let message = curve.validate().unwrap_err().to_string();
        assert!(message.contains("Jog_Stop"));
    }
}
