use super::falling::{predict_falling_location, FloorQuery};
use super::math::Vec3;
use super::physics::ZERO_ACCELERATION_TOLERANCE;
use super::stop::predict_stop_location;

/// Per-tick snapshot of a character's movement state.
///
/// Built fresh by the driver every tick and never retained.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicSample {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Ground braking friction.
    pub friction: f32,
    /// Air control friction used while falling.
    pub lateral_friction: f32,
    pub braking_deceleration: f32,
    /// Signed Z acceleration; negative pulls down.
    pub gravity: f32,
    pub max_time_step: f32,
}

impl KinematicSample {
    pub fn new(position: Vec3, velocity: Vec3, acceleration: Vec3) -> Self {
        Self {
            position,
            velocity,
            acceleration,
            ..Self::default()
        }
    }

    pub fn is_accelerating(&self) -> bool {
        !self.acceleration.is_nearly_zero(ZERO_ACCELERATION_TOLERANCE)
    }

    pub fn predict_stop(&self, max_iterations: usize) -> Option<Vec3> {
        predict_stop_location(
            self.position,
            self.velocity,
            self.acceleration,
            self.friction,
            self.braking_deceleration,
            self.max_time_step,
            max_iterations,
        )
    }

    pub fn predict_landing<F: FloorQuery + ?Sized>(
        &self,
        half_height: f32,
        max_iterations: usize,
        floor: &F,
    ) -> Option<Vec3> {
        predict_falling_location(
            self.position,
            self.velocity,
            self.acceleration,
            self.lateral_friction,
            self.gravity,
            self.max_time_step,
            max_iterations,
            half_height,
            floor,
        )
    }
}

impl Default for KinematicSample {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            friction: 8.0,
            lateral_friction: 0.0,
            braking_deceleration: 2048.0,
            gravity: -980.0,
            max_time_step: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FloorHit;

    #[test]
    fn test_default_values() {
        let sample = KinematicSample::default();
        assert_eq!(sample.position, Vec3::ZERO);
        assert_eq!(sample.friction, 8.0);
        assert_eq!(sample.braking_deceleration, 2048.0);
        assert_eq!(sample.gravity, -980.0);
        assert_eq!(sample.max_time_step, 0.05);
    }

    #[test]
    fn test_new_keeps_movement_defaults() {
        let sample = KinematicSample::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(100.0, 0.0, 0.0),
            Vec3::ZERO,
        );
        assert_eq!(sample.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(sample.velocity, Vec3::new(100.0, 0.0, 0.0));
        assert_eq!(sample.friction, KinematicSample::default().friction);
    }

    #[test]
    fn test_is_accelerating_uses_tolerance() {
        let mut sample = KinematicSample::default();
        assert!(!sample.is_accelerating());
        sample.acceleration = Vec3::new(1e-6, 0.0, 0.0);
        assert!(!sample.is_accelerating());
        sample.acceleration = Vec3::new(0.0, 500.0, 0.0);
        assert!(sample.is_accelerating());
    }

    #[test]
    fn test_predict_stop_from_sample() {
        let sample = KinematicSample::new(Vec3::ZERO, Vec3::new(600.0, 0.0, 0.0), Vec3::ZERO);
        let stop = sample.predict_stop(100).expect("braking sample should stop");
        assert!(stop.x > 0.0);
    }

    #[test]
    fn test_predict_landing_from_sample() {
        let sample = KinematicSample::new(Vec3::new(0.0, 0.0, 50.0), Vec3::ZERO, Vec3::ZERO);
        let floor = |p: Vec3| FloorHit {
            is_walkable: p.z <= 0.0,
            impact_point: p.with_z(0.0),
        };
        let landing = sample.predict_landing(10.0, 100, &floor).expect("should land");
        assert_eq!(landing.z, 10.0);
    }
}
