use super::math::Vec3;
use super::physics::MIN_TICK_TIME;
use super::stop::apply_input_acceleration;

/// Result of probing the world for ground under a position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorHit {
    pub is_walkable: bool,
    /// Navigable point on the surface that was hit.
    pub impact_point: Vec3,
}

impl FloorHit {
    pub const NONE: Self = Self {
        is_walkable: false,
        impact_point: Vec3::ZERO,
    };
}

/// Collision capability supplied by the host world.
pub trait FloorQuery {
    fn query(&self, position: Vec3) -> FloorHit;
}

impl<F> FloorQuery for F
where
    F: Fn(Vec3) -> FloorHit,
{
    fn query(&self, position: Vec3) -> FloorHit {
        self(position)
    }
}

/// Predicts where a falling body lands on walkable ground.
///
/// Horizontal motion follows the same input/friction model as the ground
/// predictor; gravity is added to Z. The floor is probed after every
/// position update and the first walkable hit wins. The returned point is
/// the impact point raised by `half_height` so it lines up with the
/// character's origin.
#[allow(clippy::too_many_arguments)]
pub fn predict_falling_location<F: FloorQuery + ?Sized>(
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    lateral_friction: f32,
    gravity: f32,
    time_step: f32,
    max_iterations: usize,
    half_height: f32,
    floor: &F,
) -> Option<Vec3> {
    if !time_step.is_finite() || time_step < MIN_TICK_TIME {
        return None;
    }

    let lateral_friction = lateral_friction.max(0.0);
    let mut last_velocity = velocity;
    let mut last_location = position;

    for iteration in 1..=max_iterations {
        last_velocity =
            apply_input_acceleration(last_velocity, acceleration, lateral_friction, time_step);
        last_velocity.z += gravity * time_step;

        last_location += last_velocity * time_step;

        let hit = floor.query(last_location);
        if hit.is_walkable {
            tracing::trace!(iteration, "landing location found");
            return Some(hit.impact_point + Vec3::UP * half_height);
        }
    }

    tracing::debug!(max_iterations, "no walkable floor within budget");
    None
}
