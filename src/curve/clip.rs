use super::calibration::CalibrationCurve;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Playback-relevant data of an animation clip: its length and named curves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimClip {
    pub name: String,
    /// Length in seconds.
    pub length: f32,
    #[serde(default)]
    pub curves: Vec<CalibrationCurve>,
}

impl AnimClip {
    pub fn new(name: impl Into<String>, length: f32) -> Self {
        Self {
            name: name.into(),
            length,
            curves: Vec::new(),
        }
    }

    pub fn with_curve(mut self, curve: CalibrationCurve) -> Self {
        self.curves.push(curve);
        self
    }

    /// Parse a clip from RON and validate every curve on it.
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let clip: Self = ron::from_str(content)?;
        clip.validate()?;
        tracing::debug!(clip = %clip.name, curves = clip.curves.len(), "loaded clip");
        Ok(clip)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        for curve in &self.curves {
            if let Err(err) = curve.validate() {
                tracing::warn!(clip = %self.name, %err, "bad distance curve");
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn curve(&self, name: &str) -> Option<&CalibrationCurve> {
        self.curves.iter().find(|curve| curve.name == name)
    }

    /// Time at which the named curve reaches `distance`, or `0.0` if the
    /// clip has no such curve.
    pub fn curve_time(&self, curve_name: &str, distance: f32) -> f32 {
        self.curve(curve_name)
            .map_or(0.0, |curve| curve.sample_time(distance))
    }
}
