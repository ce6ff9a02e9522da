/// Smallest time step the predictors will integrate.
pub const MIN_TICK_TIME: f32 = 1e-6;
/// Largest braking sub-step when friction is active (33 Hz).
pub const MAX_BRAKING_SUBSTEP: f32 = 1.0 / 33.0;
/// Upper bound on braking sub-steps within one predictor iteration.
pub const MAX_BRAKING_SUBSTEPS: usize = 256;
/// Squared speed at or below which a body counts as stopped.
pub const STOP_SPEED_SQUARED: f32 = 1.0;
/// Speed below which active braking snaps velocity to zero.
pub const BRAKING_STOP_SPEED: f32 = 10.0;
/// Per-component tolerance for treating acceleration as absent.
pub const ZERO_ACCELERATION_TOLERANCE: f32 = 1e-4;
/// Magnitude below which a scalar is treated as zero.
pub const SMALL_NUMBER: f32 = 1e-8;
/// Default simulation budget used by the per-tick driver.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Whether `value` is within `SMALL_NUMBER` of zero.
pub fn is_nearly_zero(value: f32) -> bool {
    value.abs() <= SMALL_NUMBER
}

/// Wraps an angle in degrees into `[-180, 180]`.
pub fn normalize_angle_degrees(deg: f32) -> f32 {
    let mut angle = deg % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    } else if angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Shortest signed rotation from `a` to `b`, in degrees.
pub fn find_delta_angle_degrees(a: f32, b: f32) -> f32 {
    normalize_angle_degrees(b - a)
}

/// Frame-rate independent approach of `current` toward `target`.
///
/// A non-positive `speed` snaps straight to the target.
pub fn interp_to(current: f32, target: f32, delta_time: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return target;
    }
    let dist = target - current;
    if dist * dist < SMALL_NUMBER {
        return target;
    }
    current + dist * (delta_time * speed).clamp(0.0, 1.0)
}

/// [`interp_to`] for yaw-like angles, travelling the shortest arc.
pub fn interp_angle_to(current: f32, target: f32, delta_time: f32, speed: f32) -> f32 {
    if speed <= 0.0 {
        return normalize_angle_degrees(target);
    }
    let dist = find_delta_angle_degrees(current, target);
    if dist * dist < SMALL_NUMBER {
        return normalize_angle_degrees(target);
    }
    normalize_angle_degrees(current + dist * (delta_time * speed).clamp(0.0, 1.0))
}
