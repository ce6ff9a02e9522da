use super::cardinal::CardinalDirection;
use crate::config::MatchConfig;
use crate::sim::physics::ZERO_ACCELERATION_TOLERANCE;
use crate::sim::{
    find_delta_angle_degrees, interp_angle_to, interp_to, normalize_angle_degrees, Vec3,
    MIN_TICK_TIME,
};

/// Per-tick orientation input for [`LocomotionState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionInput {
    pub actor_yaw: f32,
    /// Fixed yaw between the actor and its skeletal mesh.
    pub base_mesh_yaw_offset: f32,
    pub acceleration: Vec3,
    pub aim_yaw: f32,
    pub aim_pitch: f32,
    pub delta_time: f32,
}

/// Lean, mesh facing and aim offset for a single character.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionState {
    pub actor_yaw: f32,
    pub mesh_yaw: f32,
    pub lean: f32,
    pub cardinal: CardinalDirection,
    pub cardinal_angle: f32,
    pub aim_yaw: f32,
    pub aim_pitch: f32,
}

impl LocomotionState {
    pub fn new(actor_yaw: f32, base_mesh_yaw_offset: f32) -> Self {
        Self {
            actor_yaw,
            mesh_yaw: normalize_angle_degrees(base_mesh_yaw_offset + actor_yaw),
            ..Self::default()
        }
    }

    pub fn update(&mut self, input: &LocomotionInput, config: &MatchConfig) {
        let dt = input.delta_time;

        if dt >= MIN_TICK_TIME {
            let yaw_delta = find_delta_angle_degrees(self.actor_yaw, input.actor_yaw);
            let target_lean = yaw_delta / dt * config.lean_factor;
            self.lean = interp_to(self.lean, target_lean, dt, config.lean_interp_speed);
        }
        self.actor_yaw = input.actor_yaw;

        if !input
            .acceleration
            .is_nearly_zero(ZERO_ACCELERATION_TOLERANCE)
        {
            let input_delta =
                find_delta_angle_degrees(input.acceleration.yaw_degrees(), self.actor_yaw);
            let (direction, angle) = config.cardinal.classify(input_delta);
            self.cardinal = direction;
            self.cardinal_angle = angle;

            let target = input.base_mesh_yaw_offset + angle + self.actor_yaw;
            self.mesh_yaw =
                interp_angle_to(self.mesh_yaw, target, dt, config.mesh_rotation_interp_speed);
        }

        self.aim_yaw =
            normalize_angle_degrees(input.aim_yaw - (self.mesh_yaw - input.base_mesh_yaw_offset));
        self.aim_pitch = normalize_angle_degrees(input.aim_pitch);
    }
}
