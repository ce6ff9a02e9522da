use super::mode::MatchMode;
use crate::config::MatchConfig;
use crate::sim::{FloorQuery, KinematicSample, Vec3};

/// Per-character distance matching driver.
///
/// Tracks where the current move started (or will end) and turns the
/// character's position into the signed distance fed to a calibration curve.
/// Owned by one character and updated once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMatchState {
    was_accelerating: bool,
    is_falling: bool,
    reference_location: Vec3,
    mode: MatchMode,
    matching_distance: f32,
}

impl DistanceMatchState {
    pub fn new(position: Vec3) -> Self {
        Self {
            was_accelerating: false,
            is_falling: false,
            reference_location: position,
            mode: MatchMode::Approaching,
            matching_distance: 0.0,
        }
    }

    pub fn is_accelerating(&self) -> bool {
        self.was_accelerating
    }

    pub fn is_falling(&self) -> bool {
        self.is_falling
    }

    pub fn reference_location(&self) -> Vec3 {
        self.reference_location
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn matching_distance(&self) -> f32 {
        self.matching_distance
    }

    /// Advances the driver by one tick and returns the new matching distance.
    ///
    /// Acceleration edges are only tracked on the ground. Leaving the ground
    /// predicts the landing point; touching down re-evaluates the move as if
    /// acceleration had just changed. A failed prediction keeps the previous
    /// reference and mode.
    pub fn update<F: FloorQuery + ?Sized>(
        &mut self,
        sample: &KinematicSample,
        is_falling: bool,
        config: &MatchConfig,
        floor: &F,
    ) -> f32 {
        let accelerating = sample.is_accelerating();

        match (self.is_falling, is_falling) {
            (false, true) => self.begin_fall(sample, config, floor),
            (true, false) => self.acceleration_changed(sample, accelerating, config),
            (false, false) if accelerating != self.was_accelerating => {
                self.acceleration_changed(sample, accelerating, config)
            }
            _ => {}
        }

        self.is_falling = is_falling;
        if !is_falling {
            self.was_accelerating = accelerating;
        }

        let distance = if is_falling {
            sample.position.distance(self.reference_location)
        } else {
            sample.position.distance_2d(self.reference_location)
        };
        self.matching_distance = self
            .mode
            .signed_distance(distance * config.distance_scaling);
        self.matching_distance
    }

    fn acceleration_changed(
        &mut self,
        sample: &KinematicSample,
        accelerating: bool,
        config: &MatchConfig,
    ) {
        if accelerating {
            tracing::debug!(position = ?sample.position, "move started");
            self.reference_location = sample.position;
            self.mode = MatchMode::Approaching;
            return;
        }

        match sample.predict_stop(config.max_simulation_iterations) {
            Some(stop) => {
                tracing::debug!(?stop, "move stopping");
                self.reference_location = stop;
                self.mode = MatchMode::Receding;
            }
            None => {
                tracing::debug!("no stop prediction, keeping reference");
            }
        }
    }

    fn begin_fall<F: FloorQuery + ?Sized>(
        &mut self,
        sample: &KinematicSample,
        config: &MatchConfig,
        floor: &F,
    ) {
        match sample.predict_landing(
            config.capsule_half_height,
            config.max_simulation_iterations,
            floor,
        ) {
            Some(landing) => {
                tracing::debug!(?landing, "fall started");
                self.reference_location = landing;
                self.mode = MatchMode::Receding;
            }
            None => {
                tracing::debug!("no landing prediction, keeping reference");
            }
        }
    }
}

impl Default for DistanceMatchState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
