//! distmatch - Distance matching for locomotion animation.
//!
//! Time-warps start and stop clips so a character's feet cover exactly the
//! ground it actually travels, by mapping a signed distance to clip time.
//!
//! # Architecture
//!
//! Layered modules, each depending only on the ones above it (`config` is
//! shared by `locomotion` and `matching`):
//!
//! - **sim**: Vector math, movement constants, stop and landing prediction
//! - **curve**: Calibration curves and clip data
//! - **locomotion**: Cardinal direction, lean and aim offset
//! - **matching**: Per-character driver and playback cursor
//! - **ffi**: C FFI bindings
//!
//! # Usage
//!
//! ```ignore
//! use distmatch::{DistanceMatchState, DistanceMatchPlayer, KinematicSample, MatchConfig};
//!
//! let distance = state.update(&sample, is_falling, &config, &floor);
//! let time = player.update(&clip, distance, delta_time);
//! ```
//!
//! For engine hosts, link the cdylib and use `dm_*` FFI functions.

pub mod config;
pub mod curve;
pub mod error;
pub mod locomotion;
pub mod matching;
pub mod sim;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types at crate root
pub use config::MatchConfig;
pub use curve::{sample_time, AnimClip, CalibrationCurve, CurveKey};
pub use error::{Error, Result};
pub use matching::{DistanceMatchPlayer, DistanceMatchState, MatchMode};
pub use sim::{
    predict_falling_location, predict_stop_location, FloorHit, FloorQuery, KinematicSample, Vec3,
};
