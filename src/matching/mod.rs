//! Per-character driver that ties motion prediction to curve playback.
//!
//! The host calls [`DistanceMatchState::update`] once per tick with a fresh
//! [`KinematicSample`](crate::sim::KinematicSample), then feeds the returned
//! distance to [`DistanceMatchPlayer::update`] to get the clip time to pose.

mod mode;
mod player;
mod state;

pub use mode::MatchMode;
pub use player::{DistanceMatchPlayer, DEFAULT_CURVE_NAME};
pub use state::DistanceMatchState;
