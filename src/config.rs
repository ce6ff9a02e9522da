//! Tunables for the per-character distance matching driver.
//!
//! Values are authored in RON alongside other animation data:
//!
//! ```
//! use distmatch::MatchConfig;
//!
//! let config = MatchConfig::from_ron_str("(distance_scaling: 0.5)").unwrap();
//! assert_eq!(config.distance_scaling, 0.5);
//! assert_eq!(config.max_simulation_iterations, 100);
//! ```

use crate::error::{Error, Result};
use crate::locomotion::CardinalThresholds;
use crate::sim::DEFAULT_MAX_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Iteration budget handed to the stop and landing predictors.
    pub max_simulation_iterations: usize,
    /// Multiplier applied to the matching distance before curve lookup.
    pub distance_scaling: f32,
    /// Height of the character origin above its feet.
    pub capsule_half_height: f32,
    pub lean_factor: f32,
    pub lean_interp_speed: f32,
    pub mesh_rotation_interp_speed: f32,
    pub cardinal: CardinalThresholds,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_simulation_iterations: DEFAULT_MAX_ITERATIONS,
            distance_scaling: 1.0,
            capsule_half_height: 88.0,
            lean_factor: 0.3,
            lean_interp_speed: 10.0,
            mesh_rotation_interp_speed: 10.0,
            cardinal: CardinalThresholds::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: Self = ron::from_str(content)?;
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejected distance matching config");
            return Err(err);
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_simulation_iterations == 0 {
            return Err(Error::InvalidConfig(
                "max_simulation_iterations must be at least 1".into(),
            ));
        }
        if !self.distance_scaling.is_finite() || self.distance_scaling <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "distance_scaling must be positive, got {}",
                self.distance_scaling
            )));
        }
        if is_negative_or_nan(self.capsule_half_height) {
            return Err(Error::InvalidConfig(format!(
                "capsule_half_height must not be negative, got {}",
                self.capsule_half_height
            )));
        }
        for (name, value) in [
            ("lean_factor", self.lean_factor),
            ("lean_interp_speed", self.lean_interp_speed),
            ("mesh_rotation_interp_speed", self.mesh_rotation_interp_speed),
        ] {
            if is_negative_or_nan(value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        self.cardinal.validate()
    }
}

fn is_negative_or_nan(value: f32) -> bool {
    value.is_nan() || value < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MatchConfig::default();
        assert_eq!(config.max_simulation_iterations, 100);
        assert_eq!(config.distance_scaling, 1.0);
        assert_eq!(config.capsule_half_height, 88.0);
        assert_eq!(config.lean_factor, 0.3);
        assert_eq!(config.cardinal, CardinalThresholds::narrow());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let config = MatchConfig::from_ron_str(
            "(max_simulation_iterations: 40, cardinal: (forward_max: 50.0, backward_min: 130.0))",
        )
        .unwrap();
        assert_eq!(config.max_simulation_iterations, 40);
        assert_eq!(config.cardinal, CardinalThresholds::wide());
        assert_eq!(config.lean_interp_speed, 10.0);
    }

    #[test]
    fn test_round_trip_through_ron() {
        let mut config = MatchConfig::default();
        config.distance_scaling = 0.75;
        let text = config.to_ron_string().unwrap();
        let parsed = MatchConfig::from_ron_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_rejects_zero_iterations() {
        let result = MatchConfig::from_ron_str("(max_simulation_iterations: 0)");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_positive_scaling() {
        let config = MatchConfig {
            distance_scaling: 0.0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_lean_speed() {
        let config = MatchConfig {
            lean_interp_speed: -1.0,
            ..MatchConfig::default()
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("lean_interp_speed"));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let result =
            MatchConfig::from_ron_str("(cardinal: (forward_max: 120.0, backward_min: 60.0))");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_malformed_ron() {
        let result = MatchConfig::from_ron_str("(distance_scaling: )");
        assert!(matches!(result, Err(Error::Ron(_))));
    }
}
