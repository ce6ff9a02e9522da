//! Kinematic primitives and motion prediction.
//!
//! This module has no knowledge of animation data. It only integrates the
//! character movement model forward to find stop and landing points.

mod falling;
mod kinematics;
mod math;
mod stop;

pub mod physics;

pub use falling::{predict_falling_location, FloorHit, FloorQuery};
pub use kinematics::KinematicSample;
pub use math::{lerp, Vec3};
pub use physics::{
    find_delta_angle_degrees, interp_angle_to, interp_to, normalize_angle_degrees,
    DEFAULT_MAX_ITERATIONS, MIN_TICK_TIME,
};
pub use stop::predict_stop_location;
