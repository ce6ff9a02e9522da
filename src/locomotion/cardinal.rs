use crate::error::{Error, Result};
use crate::sim::normalize_angle_degrees;
use serde::{Deserialize, Serialize};

/// Locomotion blend-space quadrant relative to the actor's facing.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardinalDirection {
    #[default]
    North,
    East,
    South,
    West,
}

/// Angle bands, in degrees of |input delta|, that split movement input into
/// the four cardinal directions.
///
/// Below `forward_max` is North, above `backward_min` is South, and the band
/// in between is a strafe.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardinalThresholds {
    pub forward_max: f32,
    pub backward_min: f32,
}

impl CardinalThresholds {
    pub const fn new(forward_max: f32, backward_min: f32) -> Self {
        Self {
            forward_max,
            backward_min,
        }
    }

    /// Narrow strafe band (70° / 110°).
    pub const fn narrow() -> Self {
        Self::new(70.0, 110.0)
    }

    /// Wide strafe band (50° / 130°).
    pub const fn wide() -> Self {
        Self::new(50.0, 130.0)
    }

    pub fn validate(&self) -> Result<()> {
        let ordered = self.forward_max > 0.0
            && self.forward_max <= self.backward_min
            && self.backward_min < 180.0;
        if !ordered {
            return Err(Error::InvalidConfig(format!(
                "cardinal thresholds must satisfy 0 < forward_max <= backward_min < 180, got {} / {}",
                self.forward_max, self.backward_min
            )));
        }
        Ok(())
    }

    /// Classifies `input_delta` (actor yaw minus input yaw, in degrees).
    ///
    /// Returns the direction and the yaw offset that turns the mesh from the
    /// actor's facing toward the movement input for that direction's clip.
    pub fn classify(&self, input_delta: f32) -> (CardinalDirection, f32) {
        let (direction, angle) = if input_delta > 0.0 {
            if input_delta < self.forward_max {
                (CardinalDirection::North, input_delta)
            } else if input_delta > self.backward_min {
                (CardinalDirection::South, input_delta + 180.0)
            } else {
                (CardinalDirection::West, input_delta - 90.0)
            }
        } else if input_delta > -self.forward_max {
            (CardinalDirection::North, input_delta)
        } else if input_delta < -self.backward_min {
            (CardinalDirection::South, input_delta + 180.0)
        } else {
            (CardinalDirection::East, input_delta + 90.0)
        };

        (direction, -normalize_angle_degrees(angle))
    }
}

impl Default for CardinalThresholds {
    fn default() -> Self {
        Self::narrow()
    }
}
