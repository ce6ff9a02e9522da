//! C ABI for hosting distmatch inside a game engine.
//!
//! Functions:
//! - `dm_sample_time` - curve distance to clip time
//! - `dm_predict_stop_location` / `dm_predict_falling_location` - predictors
//! - `dm_state_new` / `dm_state_update` / `dm_state_free` - per-character driver
//!
//! # Return Codes
//! - `1`: Found
//! - `0`: Not found (predictors) or success (`dm_state_update`)
//! - `-1`: Null pointer

use crate::config::MatchConfig;
use crate::curve::{sample_time, CurveKey};
use crate::matching::DistanceMatchState;
use crate::sim::{
    predict_falling_location, predict_stop_location, FloorHit, FloorQuery, KinematicSample, Vec3,
};
use std::ffi::{c_char, c_void, CStr};

pub const DM_FOUND: i32 = 1;
pub const DM_NOT_FOUND: i32 = 0;
pub const DM_NULL_POINTER: i32 = -1;

/// Host floor probe: returns the walkable hit under `position`, if any.
pub type DmFloorQueryFn = unsafe extern "C" fn(user_data: *mut c_void, position: Vec3) -> FloorHit;

struct CallbackFloor {
    query: Option<DmFloorQueryFn>,
    user_data: *mut c_void,
}

impl FloorQuery for CallbackFloor {
    fn query(&self, position: Vec3) -> FloorHit {
        match self.query {
            // SAFETY: the host guarantees the callback and user data stay valid
            // for the duration of the call that received them.
            Some(query) => unsafe { query(self.user_data, position) },
            None => FloorHit::NONE,
        }
    }
}

/// Map `distance` to clip time through a calibration curve.
///
/// # Safety
/// - `keys` must point to `key_count` valid keys, or be null when `key_count` is 0
#[no_mangle]
pub unsafe extern "C" fn dm_sample_time(
    keys: *const CurveKey,
    key_count: usize,
    distance: f32,
) -> f32 {
    if keys.is_null() || key_count == 0 {
        return 0.0;
    }
    let keys = std::slice::from_raw_parts(keys, key_count);
    sample_time(keys, distance)
}

/// Predict where a braking character stops.
///
/// # Safety
/// - `sample` must be a valid pointer to an initialized `KinematicSample`
/// - `out_location` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn dm_predict_stop_location(
    sample: *const KinematicSample,
    max_iterations: u32,
    out_location: *mut Vec3,
) -> i32 {
    if sample.is_null() || out_location.is_null() {
        return DM_NULL_POINTER;
    }
    let sample = &*sample;

    match predict_stop_location(
        sample.position,
        sample.velocity,
        sample.acceleration,
        sample.friction,
        sample.braking_deceleration,
        sample.max_time_step,
        max_iterations as usize,
    ) {
        Some(location) => {
            *out_location = location;
            DM_FOUND
        }
        None => DM_NOT_FOUND,
    }
}

/// Predict where a falling character lands.
///
/// # Safety
/// - `sample` must be a valid pointer to an initialized `KinematicSample`
/// - `out_location` must be a valid pointer
/// - `floor_query`, when non-null, must be safe to call with `user_data`
#[no_mangle]
pub unsafe extern "C" fn dm_predict_falling_location(
    sample: *const KinematicSample,
    half_height: f32,
    max_iterations: u32,
    floor_query: Option<DmFloorQueryFn>,
    user_data: *mut c_void,
    out_location: *mut Vec3,
) -> i32 {
    if sample.is_null() || out_location.is_null() {
        return DM_NULL_POINTER;
    }
    let sample = &*sample;
    let floor = CallbackFloor {
        query: floor_query,
        user_data,
    };

    match predict_falling_location(
        sample.position,
        sample.velocity,
        sample.acceleration,
        sample.lateral_friction,
        sample.gravity,
        sample.max_time_step,
        max_iterations as usize,
        half_height,
        &floor,
    ) {
        Some(location) => {
            *out_location = location;
            DM_FOUND
        }
        None => DM_NOT_FOUND,
    }
}

/// Opaque handle to a per-character driver.
pub type DmStateHandle = *mut c_void;

struct DriverState {
    state: DistanceMatchState,
    config: MatchConfig,
}

/// Create a driver anchored at `position`.
///
/// `config_ron` may be null for defaults. Returns null if the config does
/// not parse or validate.
///
/// # Safety
/// - `config_ron`, when non-null, must be a valid NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn dm_state_new(position: Vec3, config_ron: *const c_char) -> DmStateHandle {
    let config = if config_ron.is_null() {
        MatchConfig::default()
    } else {
        let Ok(text) = CStr::from_ptr(config_ron).to_str() else {
            return std::ptr::null_mut();
        };
        match MatchConfig::from_ron_str(text) {
            Ok(config) => config,
            Err(_) => return std::ptr::null_mut(),
        }
    };

    let driver = DriverState {
        state: DistanceMatchState::new(position),
        config,
    };
    Box::into_raw(Box::new(driver)) as DmStateHandle
}

/// Advance a driver by one tick and write the signed matching distance.
///
/// # Safety
/// - `handle` must be a valid handle from `dm_state_new`
/// - `sample` and `out_distance` must be valid pointers
/// - `floor_query`, when non-null, must be safe to call with `user_data`
#[no_mangle]
pub unsafe extern "C" fn dm_state_update(
    handle: DmStateHandle,
    sample: *const KinematicSample,
    is_falling: u8,
    floor_query: Option<DmFloorQueryFn>,
    user_data: *mut c_void,
    out_distance: *mut f32,
) -> i32 {
    if handle.is_null() || sample.is_null() || out_distance.is_null() {
        return DM_NULL_POINTER;
    }
    let driver = &mut *(handle as *mut DriverState);
    let floor = CallbackFloor {
        query: floor_query,
        user_data,
    };

    *out_distance = driver
        .state
        .update(&*sample, is_falling != 0, &driver.config, &floor);
    0
}

/// Free a driver handle.
///
/// # Safety
/// - `handle` must be a valid handle returned by `dm_state_new`, or null
#[no_mangle]
pub unsafe extern "C" fn dm_state_free(handle: DmStateHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut DriverState));
    }
}
