use super::math::Vec3;
use super::physics::{
    BRAKING_STOP_SPEED, MAX_BRAKING_SUBSTEP, MAX_BRAKING_SUBSTEPS, MIN_TICK_TIME,
    STOP_SPEED_SQUARED, ZERO_ACCELERATION_TOLERANCE,
};

/// Predicts where a decelerating body comes to rest on the ground plane.
///
/// Steps the movement model forward by `time_step` up to `max_iterations`
/// times. Returns `None` when the body is still being driven forward, when
/// nothing can slow it down, or when it has not stopped within the budget.
/// Callers should keep their previous reference location in that case.
pub fn predict_stop_location(
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    friction: f32,
    braking_deceleration: f32,
    time_step: f32,
    max_iterations: usize,
) -> Option<Vec3> {
    if !time_step.is_finite() || time_step < MIN_TICK_TIME {
        return None;
    }
    if acceleration.dot(velocity) > 0.0 {
        return None;
    }

    let zero_acceleration = acceleration.is_nearly_zero(ZERO_ACCELERATION_TOLERANCE);
    let braking_deceleration = braking_deceleration.max(0.0);
    let friction = friction.max(0.0);
    let zero_friction = friction == 0.0;
    let zero_braking = braking_deceleration == 0.0;

    if zero_acceleration && zero_friction && zero_braking {
        return None;
    }

    let mut last_velocity = if zero_acceleration {
        velocity
    } else {
        velocity.project_onto_normal(acceleration.normalize())
    };
    last_velocity.z = 0.0;

    let mut last_location = position;

    for iteration in 1..=max_iterations {
        let old_velocity = last_velocity;

        last_velocity = if zero_acceleration {
            brake(
                last_velocity,
                friction,
                braking_deceleration,
                time_step,
            )
        } else {
            apply_input_acceleration(last_velocity, acceleration, friction, time_step)
        };

        last_location += last_velocity * time_step;

        if last_velocity.size_squared() <= STOP_SPEED_SQUARED
            || last_velocity.dot(old_velocity) <= 0.0
        {
            tracing::trace!(iteration, "stop location converged");
            return Some(last_location);
        }
    }

    tracing::debug!(max_iterations, "stop location did not converge");
    None
}

/// One iteration of pure braking, sub-stepped while friction is active.
fn brake(velocity: Vec3, friction: f32, braking_deceleration: f32, time_step: f32) -> Vec3 {
    let zero_friction = friction == 0.0;
    let zero_braking = braking_deceleration == 0.0;
    let reverse_accel = if zero_braking {
        Vec3::ZERO
    } else {
        -(velocity.normalize() * braking_deceleration)
    };

    let old_velocity = velocity;
    let mut velocity = velocity;
    let mut remaining = time_step;

    for _ in 0..MAX_BRAKING_SUBSTEPS {
        if remaining < MIN_TICK_TIME {
            break;
        }
        // Zero friction is constant deceleration and needs no subdivision.
        let dt = if remaining > MAX_BRAKING_SUBSTEP && !zero_friction {
            MAX_BRAKING_SUBSTEP.min(remaining * 0.5)
        } else {
            remaining
        };
        remaining -= dt;

        velocity += (velocity * -friction + reverse_accel) * dt;

        // Braking never reverses direction.
        if velocity.dot(old_velocity) <= 0.0 {
            velocity = Vec3::ZERO;
            break;
        }
    }

    let speed_squared = velocity.size_squared();
    if speed_squared <= STOP_SPEED_SQUARED
        || (!zero_braking && speed_squared <= BRAKING_STOP_SPEED * BRAKING_STOP_SPEED)
    {
        return Vec3::ZERO;
    }
    velocity
}

/// Applies input acceleration in the ground plane.
///
/// Friction bends the velocity toward the acceleration's heading, then the
/// combined acceleration is integrated over `time_step`. The Z component of
/// `velocity` passes through untouched.
pub(crate) fn apply_input_acceleration(
    velocity: Vec3,
    acceleration: Vec3,
    friction: f32,
    time_step: f32,
) -> Vec3 {
    let planar_velocity = velocity.horizontal();
    let mut total_acceleration = acceleration.horizontal();

    let accel_dir = total_acceleration.normalize();
    let speed = planar_velocity.magnitude();
    total_acceleration += -(planar_velocity - accel_dir * speed) * friction;

    (planar_velocity + total_acceleration * time_step).with_z(velocity.z)
}
